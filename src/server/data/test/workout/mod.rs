use crate::server::data::workout::WorkoutRepository;
use entity::prelude::*;
use sea_orm::{DbErr, EntityTrait, SqlErr};
use test_utils::{builder::TestBuilder, factory};

mod delete_mapping;
mod get_all_options;
mod get_mappings;
mod options;
