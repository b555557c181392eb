//! Aggregate statistics over all users and their hillforts.

use crate::User;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HillfortStats {
    pub user_count: usize,
    pub hillfort_count: usize,
    pub image_count: usize,
    pub visited_count: usize,
    /// Email of the user with the most hillforts; first wins on ties.
    pub most_active_user: Option<String>,
}

impl HillfortStats {
    /// Single pass over users and their hillforts.
    pub fn from_users(users: &[User]) -> Self {
        let mut stats = Self {
            user_count: users.len(),
            ..Default::default()
        };
        let mut top = 0usize;

        for user in users {
            let count = user.hillforts.len();
            stats.hillfort_count += count;
            for hillfort in &user.hillforts {
                stats.image_count += hillfort.images.len();
                if hillfort.visited {
                    stats.visited_count += 1;
                }
            }
            if count > top {
                top = count;
                stats.most_active_user = Some(user.email.clone());
            }
        }

        stats
    }
}
