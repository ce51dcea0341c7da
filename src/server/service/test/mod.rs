use async_trait::async_trait;
use chrono::{DateTime, Local, NaiveDate, TimeZone};
use std::collections::HashMap;

use crate::server::{
    model::{
        actor::{Actor, Role},
        directory::UserProfile,
    },
    service::directory::UserDirectory,
};

mod availability;

/// In-memory directory standing in for the auth service.
#[derive(Default)]
pub struct StubDirectory {
    coaches: HashMap<String, UserProfile>,
    users: HashMap<String, UserProfile>,
}

impl StubDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a coach, who is also resolvable as a user
    pub fn with_coach(mut self, id: &str) -> Self {
        let profile = profile(id);
        self.coaches.insert(id.to_string(), profile.clone());
        self.users.insert(id.to_string(), profile);
        self
    }

    pub fn with_user(mut self, id: &str) -> Self {
        self.users.insert(id.to_string(), profile(id));
        self
    }
}

#[async_trait]
impl UserDirectory for StubDirectory {
    async fn get_coach(&self, coach_id: &str) -> Option<UserProfile> {
        self.coaches.get(coach_id).cloned()
    }

    async fn get_user(&self, user_id: &str) -> Option<UserProfile> {
        self.users.get(user_id).cloned()
    }

    async fn get_all_coaches(&self) -> Vec<UserProfile> {
        let mut coaches: Vec<UserProfile> = self.coaches.values().cloned().collect();
        coaches.sort_by(|a, b| a.id.cmp(&b.id));
        coaches
    }
}

fn profile(id: &str) -> UserProfile {
    UserProfile {
        id: id.to_string(),
        name: format!("Name of {}", id),
        email: Some(format!("{}@example.com", id)),
        image_url: None,
    }
}

/// 2030-06-10 at `hour`:`minute` local time.
pub fn at(hour: u32, minute: u32) -> DateTime<Local> {
    on(10, hour, minute)
}

/// 2030-06-`day` at `hour`:`minute` local time.
pub fn on(day: u32, hour: u32, minute: u32) -> DateTime<Local> {
    Local
        .with_ymd_and_hms(2030, 6, day, hour, minute, 0)
        .unwrap()
}

pub fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2030, 6, d).unwrap()
}

pub fn client(id: &str) -> Actor {
    Actor::new(id, Role::Client)
}

pub fn coach(id: &str) -> Actor {
    Actor::new(id, Role::Coach)
}
