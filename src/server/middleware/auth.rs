//! Caller identity extraction and access guards.
//!
//! Token verification happens at the gateway, which forwards the authenticated user id
//! and role as headers. `Actor` is extracted from those headers for every protected
//! endpoint; `AuthGuard` then checks the permissions an endpoint requires.

use axum::{extract::FromRequestParts, http::request::Parts};

use crate::server::{
    error::{auth::AuthError, AppError},
    model::actor::{Actor, Role},
    util::parse::validate_actor_id,
};

pub const ACTOR_ID_HEADER: &str = "x-actor-id";
pub const ACTOR_ROLE_HEADER: &str = "x-actor-role";

impl<S> FromRequestParts<S> for Actor
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let header = |name: &'static str| -> Result<String, AuthError> {
            let value = parts
                .headers
                .get(name)
                .ok_or(AuthError::MissingIdentity(name))?;

            value
                .to_str()
                .map(|v| v.trim().to_string())
                .map_err(|_| AuthError::InvalidIdentity(format!("{} is not valid text", name)))
        };

        let id = header(ACTOR_ID_HEADER)?;
        let role = header(ACTOR_ROLE_HEADER)?;

        validate_actor_id("actor id", &id)
            .map_err(|e| AuthError::InvalidIdentity(e.to_string()))?;
        let role = role.parse::<Role>().map_err(AuthError::InvalidIdentity)?;

        Ok(Actor::new(id, role))
    }
}

pub enum Permission<'a> {
    Admin,
    Client,
    /// The coach identified by the id, or an admin.
    CoachOrAdmin(&'a str),
}

pub struct AuthGuard<'a> {
    actor: &'a Actor,
}

impl<'a> AuthGuard<'a> {
    pub fn new(actor: &'a Actor) -> Self {
        Self { actor }
    }

    /// Checks that the actor holds every listed permission.
    ///
    /// # Returns
    /// - `Ok(&Actor)` - The actor is allowed
    /// - `Err(AuthError::AccessDenied)` - A permission is missing
    pub fn require(&self, permissions: &[Permission]) -> Result<&'a Actor, AppError> {
        for permission in permissions {
            let allowed = match permission {
                Permission::Admin => self.actor.is_admin(),
                Permission::Client => self.actor.role == Role::Client,
                Permission::CoachOrAdmin(coach_id) => {
                    self.actor.is_admin()
                        || (self.actor.role == Role::Coach && self.actor.id == *coach_id)
                }
            };

            if !allowed {
                let reason = match permission {
                    Permission::Admin => "admin role required".to_string(),
                    Permission::Client => "client role required".to_string(),
                    Permission::CoachOrAdmin(coach_id) => {
                        format!("only coach {} or an admin may do this", coach_id)
                    }
                };

                return Err(AuthError::AccessDenied(self.actor.id.clone(), reason).into());
            }
        }

        Ok(self.actor)
    }
}
