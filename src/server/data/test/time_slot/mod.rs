use crate::server::data::time_slot::TimeSlotRepository;
use entity::prelude::TimeSlot;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod get_all;
mod get_by_id;
