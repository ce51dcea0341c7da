use crate::server::{
    data::booking::BookingRepository,
    model::booking::{BookingState, NewBooking},
};
use chrono::NaiveDate;
use sea_orm::{DbErr, EntityTrait, SqlErr};
use test_utils::{builder::TestBuilder, factory, factory::booking::BookingFactory};

mod count_for_workout;
mod create;
mod get_for_actor;
mod get_live_for_coaches_on_date;
mod get_scheduled_until;
mod transition_state;

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2030, 6, d).unwrap()
}
