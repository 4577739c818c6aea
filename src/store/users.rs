use tokio::sync::RwLock;

use crate::models::{Id, NewUser, User, UserPatch};
use super::collection::{Collection, Patch};

impl Patch<User> for UserPatch {
    fn apply(self, user: &mut User) {
        if let Some(username) = self.username {
            user.username = username;
        }
        if let Some(email) = self.email {
            user.email = email;
        }
        if let Some(password) = self.password {
            user.password = password;
        }
        if let Some(name) = self.name {
            user.name = name;
        }
        if let Some(date_of_birth) = self.date_of_birth {
            user.date_of_birth = date_of_birth;
        }
        if let Some(height) = self.height {
            user.height = height;
        }
        if let Some(weight) = self.weight {
            user.weight = weight;
        }
        if let Some(has_pcos) = self.has_pcos {
            user.has_pcos = has_pcos;
        }
        if let Some(pcos_type) = self.pcos_type {
            user.pcos_type = pcos_type;
        }
        if let Some(language) = self.language {
            user.language = language;
        }
        if let Some(dark_mode) = self.dark_mode {
            user.dark_mode = dark_mode;
        }
        if let Some(connected) = self.google_fit_connected {
            user.google_fit_connected = connected;
        }
    }
}

#[derive(Debug, Default)]
pub struct UserStore {
    users: RwLock<Collection<User>>,
}

impl UserStore {
    pub async fn create(&self, new: NewUser) -> User {
        let user = self.users.write().await.insert(|id| User {
            id,
            username: new.username,
            email: new.email,
            password: new.password,
            name: new.name,
            date_of_birth: new.date_of_birth,
            height: new.height,
            weight: new.weight,
            has_pcos: new.has_pcos,
            pcos_type: new.pcos_type,
            language: new.language,
            dark_mode: new.dark_mode,
            google_fit_connected: new.google_fit_connected,
        });
        tracing::debug!("👤 user {} created", user.id);
        user
    }

    pub async fn get(&self, id: Id) -> Option<User> {
        self.users.read().await.get(id)
    }

    /// Case-sensitive exact match; the first user inserted wins.
    pub async fn get_by_username(&self, username: &str) -> Option<User> {
        self.users
            .read()
            .await
            .iter()
            .find(|u| u.username == username)
            .cloned()
    }

    pub async fn get_by_email(&self, email: &str) -> Option<User> {
        self.users
            .read()
            .await
            .iter()
            .find(|u| u.email == email)
            .cloned()
    }

    pub async fn update(&self, id: Id, patch: UserPatch) -> Option<User> {
        self.users.write().await.update(id, patch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_user(username: &str, email: &str) -> NewUser {
        serde_json::from_value(serde_json::json!({
            "username": username,
            "email": email,
            "password": "secret",
        }))
        .unwrap()
    }

    #[tokio::test]
    async fn create_applies_defaults_and_assigns_ids() {
        let store = UserStore::default();
        let first = store.create(new_user("luna", "luna@example.com")).await;
        let second = store.create(new_user("sol", "sol@example.com")).await;

        assert_eq!((first.id, second.id), (1, 2));
        assert_eq!(first.language, "en");
        assert!(!first.has_pcos);
        assert_eq!(store.get(2).await.unwrap().username, "sol");
        assert!(store.get(3).await.is_none());
    }

    #[tokio::test]
    async fn username_lookup_is_case_sensitive_and_first_wins() {
        let store = UserStore::default();
        store.create(new_user("luna", "a@example.com")).await;
        store.create(new_user("luna", "b@example.com")).await;

        let found = store.get_by_username("luna").await.unwrap();
        assert_eq!(found.email, "a@example.com");
        assert!(store.get_by_username("Luna").await.is_none());
        assert_eq!(store.get_by_email("b@example.com").await.unwrap().id, 2);
    }

    #[tokio::test]
    async fn update_merges_supplied_fields() {
        let store = UserStore::default();
        let user = store.create(new_user("luna", "luna@example.com")).await;

        let patch = UserPatch {
            dark_mode: Some(true),
            pcos_type: Some(Some("insulin-resistant".into())),
            ..Default::default()
        };
        let updated = store.update(user.id, patch).await.unwrap();

        assert!(updated.dark_mode);
        assert_eq!(updated.pcos_type.as_deref(), Some("insulin-resistant"));
        assert_eq!(updated.username, "luna");
        assert_eq!(updated.password, "secret");
        assert!(store.update(99, UserPatch::default()).await.is_none());
    }
}
