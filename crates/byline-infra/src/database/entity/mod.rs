//! SeaORM entities. Authors and posts are independent tables.

pub mod author;
pub mod post;

use chrono::Utc;
use sea_orm::entity::prelude::DateTimeWithTimeZone;
use sea_orm::{ActiveValue, Set};

/// Storage-owned timestamps: `created_at` once on insert, `updated_at` on
/// every later save.
pub(crate) fn stamp(
    created_at: &mut ActiveValue<DateTimeWithTimeZone>,
    updated_at: &mut ActiveValue<Option<DateTimeWithTimeZone>>,
    insert: bool,
) {
    let now: DateTimeWithTimeZone = Utc::now().into();
    if insert {
        *created_at = Set(now);
    } else {
        *updated_at = Set(Some(now));
    }
}
