// SPDX-License-Identifier: MPL-2.0
//! Toast notifications.
//!
//! Deletions report their count here; scan and config failures surface as
//! warnings instead of stopping the app. Success and info toasts close after
//! 3s, warnings after 5s, errors stay until dismissed. Up to three are shown
//! at once and the rest are queued.

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage, MAX_VISIBLE};
pub use notification::{Notification, NotificationId, Severity};
pub use toast::Toast;
