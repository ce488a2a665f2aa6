//! Activity-scoped presentation adapters

use std::sync::{Arc, RwLock};

use ruc_domain::error::Result;
use ruc_domain::value_objects::User;

use crate::clients::ImageLoader;
use crate::di::context::ActivityContext;

/// List adapter binding fetched users to an activity's list view
///
/// Activity scoped: one instance per activity component, built from the
/// activity's own context plus the application-scoped image loader. Rows
/// sit behind a lock because the adapter is handed out as a shared
/// reference while fetches repopulate it.
pub struct UserListAdapter {
    context: Arc<ActivityContext>,
    images: Arc<ImageLoader>,
    users: RwLock<Vec<User>>,
}

impl UserListAdapter {
    /// Create an empty adapter for the given activity
    pub fn new(context: Arc<ActivityContext>, images: Arc<ImageLoader>) -> Self {
        Self {
            context,
            images,
            users: RwLock::new(Vec::new()),
        }
    }

    /// The activity this adapter renders into
    pub fn activity(&self) -> &str {
        self.context.activity()
    }

    /// The image loader backing thumbnail fetches
    pub fn images(&self) -> &Arc<ImageLoader> {
        &self.images
    }

    /// Replace the adapter's rows
    pub fn set_users(&self, users: Vec<User>) {
        *self.users.write().expect("users lock poisoned") = users;
    }

    /// Number of rows
    pub fn len(&self) -> usize {
        self.users.read().expect("users lock poisoned").len()
    }

    /// Whether the adapter has no rows
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Text label for one row: full name plus street, when known
    pub fn row_label(&self, index: usize) -> Option<String> {
        let users = self.users.read().expect("users lock poisoned");
        users.get(index).map(|user| {
            let street = user.location.street.to_string();
            if street.is_empty() {
                user.name.full()
            } else {
                format!("{} - {}", user.name.full(), street)
            }
        })
    }

    /// Fetch the thumbnail bytes for one row
    pub async fn thumbnail(&self, index: usize) -> Result<Option<Arc<Vec<u8>>>> {
        let url = {
            let users = self.users.read().expect("users lock poisoned");
            users.get(index).map(|user| user.picture.thumbnail.clone())
        };
        match url {
            Some(url) if !url.is_empty() => Ok(Some(self.images.load(&url).await?)),
            _ => Ok(None),
        }
    }
}

impl std::fmt::Debug for UserListAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserListAdapter")
            .field("activity", &self.context.activity())
            .field("rows", &self.len())
            .finish()
    }
}
