use crate::server::data::feedback::FeedbackRepository;
use chrono::{TimeZone, Utc};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod append_entry;
mod get_entries;
mod get_or_create;
mod get_received_paginated;

fn at(hour: u32) -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2030, 6, 10, hour, 0, 0).unwrap()
}
