//! Account service.

use async_trait::async_trait;
use shopfront_core::{User, UserRegister};
use tracing::info;

use super::http::ApiClient;
use crate::error::ServiceResult;

/// Creates storefront accounts.
#[async_trait]
pub trait UserDirectory: Send + Sync {
    async fn create_user(&self, register: UserRegister) -> ServiceResult<User>;
}

#[async_trait]
impl UserDirectory for ApiClient {
    async fn create_user(&self, register: UserRegister) -> ServiceResult<User> {
        let url = self.url("/users");
        let user: User = self
            .send_json("POST", &url, self.http().post(&url).json(&register))
            .await?;

        info!(user_id = user.id, "Account created");
        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_created_user_ignores_extra_fields() {
        let json = r#"{
            "email": "nico@gmail.com",
            "password": "1234",
            "name": "Nicolas",
            "avatar": "https://api.lorem.space/image/face?w=640&h=480",
            "role": "customer",
            "id": 7
        }"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.id, 7);
        assert_eq!(user.name, "Nicolas");
    }

    #[test]
    fn test_register_body_shape() {
        let register = UserRegister {
            name: "Nicolas".to_string(),
            email: "nico@gmail.com".to_string(),
            password: "1234".to_string(),
            avatar: "https://cdn/a.png".to_string(),
        };
        let body = serde_json::to_value(&register).unwrap();
        assert_eq!(body["name"], "Nicolas");
        assert_eq!(body["avatar"], "https://cdn/a.png");
        assert_eq!(body["password"], "1234");
    }
}
