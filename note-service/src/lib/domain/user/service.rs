use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::user::models::ChangePasswordCommand;
use crate::domain::user::models::CreateUserCommand;
use crate::domain::user::models::NewUser;
use crate::domain::user::models::UpdateUserCommand;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::models::UserLoginCommand;
use crate::user::errors::UserError;
use crate::user::ports::UserRepository;
use crate::user::ports::UserServicePort;

/// Domain service implementation for user operations.
///
/// Concrete implementation of UserServicePort with dependency injection.
pub struct UserService<UR>
where
    UR: UserRepository,
{
    repository: Arc<UR>,
    password_hasher: auth::PasswordHasher,
}

impl<UR> UserService<UR>
where
    UR: UserRepository,
{
    /// Create a new user service with an injected repository.
    pub fn new(repository: Arc<UR>) -> Self {
        Self {
            repository,
            password_hasher: auth::PasswordHasher::new(),
        }
    }
}

#[async_trait]
impl<UR> UserServicePort for UserService<UR>
where
    UR: UserRepository,
{
    async fn create_user(&self, command: CreateUserCommand) -> Result<User, UserError> {
        // Duplicate check before insert; the unique constraint is the backstop.
        if let Some(existing) = self.repository.find_by_username(&command.username).await? {
            return Err(UserError::UsernameAlreadyExists(
                existing.username.as_str().to_string(),
            ));
        }

        let password_hash = self
            .password_hasher
            .hash(&command.password)
            .map_err(|e| UserError::PasswordHash(e.to_string()))?;

        let user = NewUser {
            username: command.username,
            password_hash,
            full_name: command.full_name,
            created_at: Utc::now(),
        };

        self.repository.create(user).await
    }

    async fn update_user(&self, command: UpdateUserCommand) -> Result<User, UserError> {
        let mut user = self
            .repository
            .find_by_id(command.id)
            .await?
            .ok_or(UserError::NotFound(command.id.0))?;

        user.full_name = command.full_name;

        self.repository.update(&user).await?;

        Ok(user)
    }

    async fn change_password(&self, command: ChangePasswordCommand) -> Result<User, UserError> {
        let mut user = self
            .repository
            .find_by_id(command.id)
            .await?
            .ok_or(UserError::NotFound(command.id.0))?;

        user.password_hash = self
            .password_hasher
            .hash(&command.password)
            .map_err(|e| UserError::PasswordHash(e.to_string()))?;

        self.repository.update(&user).await?;

        Ok(user)
    }

    async fn login(&self, command: UserLoginCommand) -> Result<User, UserError> {
        let user = self
            .repository
            .find_by_username(&command.username)
            .await?
            .ok_or_else(|| UserError::NotFoundByUsername(command.username.to_string()))?;

        if !self
            .password_hasher
            .verify(&command.password, &user.password_hash)
        {
            return Err(UserError::InvalidCredentials);
        }

        Ok(user)
    }

    async fn get_user(&self, id: UserId) -> Result<User, UserError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(UserError::NotFound(id.0))
    }

    async fn list_users(&self) -> Result<Vec<User>, UserError> {
        self.repository.list_all().await
    }

    async fn delete_user(&self, id: UserId) -> Result<User, UserError> {
        let user = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(UserError::NotFound(id.0))?;

        self.repository.delete(id).await?;

        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use mockall::mock;
    use mockall::predicate::*;

    use super::*;
    use crate::domain::user::models::Username;

    mock! {
        pub TestUserRepository {}

        #[async_trait]
        impl UserRepository for TestUserRepository {
            async fn create(&self, user: NewUser) -> Result<User, UserError>;
            async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserError>;
            async fn find_by_username(&self, username: &Username) -> Result<Option<User>, UserError>;
            async fn list_all(&self) -> Result<Vec<User>, UserError>;
            async fn update(&self, user: &User) -> Result<(), UserError>;
            async fn delete(&self, id: UserId) -> Result<(), UserError>;
        }
    }

    fn stored_user(id: i64, username: &str, password_hash: &str) -> User {
        User {
            id: UserId(id),
            username: Username::new(username.to_string()).unwrap(),
            password_hash: password_hash.to_string(),
            full_name: "Test User".to_string(),
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_create_user_hashes_password() {
        let mut repository = MockTestUserRepository::new();

        repository
            .expect_find_by_username()
            .times(1)
            .returning(|_| Ok(None));
        repository
            .expect_create()
            .withf(|user| {
                user.username.as_str() == "alice@example.com"
                    && user.password_hash.starts_with("$argon2")
                    && user.password_hash != "password123"
            })
            .times(1)
            .returning(|user| {
                Ok(User {
                    id: UserId(1),
                    username: user.username,
                    password_hash: user.password_hash,
                    full_name: user.full_name,
                    created_at: user.created_at,
                })
            });

        let service = UserService::new(Arc::new(repository));

        let command = CreateUserCommand {
            username: Username::new("alice@example.com".to_string()).unwrap(),
            password: "password123".to_string(),
            full_name: "Alice".to_string(),
        };

        let user = service.create_user(command).await.unwrap();
        assert_eq!(user.id, UserId(1));
        assert!(user.password_hash.starts_with("$argon2"));
    }

    #[tokio::test]
    async fn test_create_user_duplicate_username() {
        let mut repository = MockTestUserRepository::new();

        repository
            .expect_find_by_username()
            .times(1)
            .returning(|_| Ok(Some(stored_user(7, "alice@example.com", "$argon2id$existing"))));
        repository.expect_create().times(0);

        let service = UserService::new(Arc::new(repository));

        let command = CreateUserCommand {
            username: Username::new("alice@example.com".to_string()).unwrap(),
            password: "password456".to_string(),
            full_name: "Other Alice".to_string(),
        };

        let result = service.create_user(command).await;
        assert!(matches!(
            result.unwrap_err(),
            UserError::UsernameAlreadyExists(_)
        ));
    }

    #[tokio::test]
    async fn test_update_user_changes_full_name_only() {
        let mut repository = MockTestUserRepository::new();

        repository
            .expect_find_by_id()
            .with(eq(UserId(3)))
            .times(1)
            .returning(|_| Ok(Some(stored_user(3, "bob", "$argon2id$digest"))));
        repository
            .expect_update()
            .withf(|user| {
                user.full_name == "Robert" && user.password_hash == "$argon2id$digest"
            })
            .times(1)
            .returning(|_| Ok(()));

        let service = UserService::new(Arc::new(repository));

        let user = service
            .update_user(UpdateUserCommand {
                id: UserId(3),
                full_name: "Robert".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(user.full_name, "Robert");
    }

    #[tokio::test]
    async fn test_update_user_not_found() {
        let mut repository = MockTestUserRepository::new();

        repository
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(None));

        let service = UserService::new(Arc::new(repository));

        let result = service
            .update_user(UpdateUserCommand {
                id: UserId(99),
                full_name: "Nobody".to_string(),
            })
            .await;

        assert!(matches!(result.unwrap_err(), UserError::NotFound(99)));
    }

    #[tokio::test]
    async fn test_change_password_stores_new_digest() {
        let mut repository = MockTestUserRepository::new();

        repository
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(Some(stored_user(3, "bob", "$argon2id$old_digest"))));
        repository
            .expect_update()
            .withf(|user| {
                user.password_hash.starts_with("$argon2")
                    && user.password_hash != "$argon2id$old_digest"
            })
            .times(1)
            .returning(|_| Ok(()));

        let service = UserService::new(Arc::new(repository));

        let user = service
            .change_password(ChangePasswordCommand {
                id: UserId(3),
                password: "new_password".to_string(),
            })
            .await
            .unwrap();

        assert_ne!(user.password_hash, "$argon2id$old_digest");
    }

    #[tokio::test]
    async fn test_login_success() {
        let hasher = auth::PasswordHasher::new();
        let digest = hasher.hash("correct_password").unwrap();

        let mut repository = MockTestUserRepository::new();
        let user = stored_user(5, "carol", &digest);
        repository
            .expect_find_by_username()
            .times(1)
            .returning(move |_| Ok(Some(user.clone())));

        let service = UserService::new(Arc::new(repository));

        let result = service
            .login(UserLoginCommand {
                username: Username::new("carol".to_string()).unwrap(),
                password: "correct_password".to_string(),
            })
            .await;

        assert_eq!(result.unwrap().id, UserId(5));
    }

    #[tokio::test]
    async fn test_login_wrong_password() {
        let hasher = auth::PasswordHasher::new();
        let digest = hasher.hash("correct_password").unwrap();

        let mut repository = MockTestUserRepository::new();
        let user = stored_user(5, "carol", &digest);
        repository
            .expect_find_by_username()
            .times(1)
            .returning(move |_| Ok(Some(user.clone())));

        let service = UserService::new(Arc::new(repository));

        let result = service
            .login(UserLoginCommand {
                username: Username::new("carol".to_string()).unwrap(),
                password: "wrong_password".to_string(),
            })
            .await;

        assert!(matches!(result.unwrap_err(), UserError::InvalidCredentials));
    }

    #[tokio::test]
    async fn test_login_unknown_username() {
        let mut repository = MockTestUserRepository::new();
        repository
            .expect_find_by_username()
            .times(1)
            .returning(|_| Ok(None));

        let service = UserService::new(Arc::new(repository));

        let result = service
            .login(UserLoginCommand {
                username: Username::new("nobody".to_string()).unwrap(),
                password: "whatever".to_string(),
            })
            .await;

        assert!(matches!(
            result.unwrap_err(),
            UserError::NotFoundByUsername(_)
        ));
    }

    #[tokio::test]
    async fn test_delete_user_returns_removed_entity() {
        let mut repository = MockTestUserRepository::new();

        repository
            .expect_find_by_id()
            .with(eq(UserId(5)))
            .times(1)
            .returning(|_| Ok(Some(stored_user(5, "carol", "$argon2id$digest"))));
        repository
            .expect_delete()
            .with(eq(UserId(5)))
            .times(1)
            .returning(|_| Ok(()));

        let service = UserService::new(Arc::new(repository));

        let user = service.delete_user(UserId(5)).await.unwrap();
        assert_eq!(user.username.as_str(), "carol");
    }

    #[tokio::test]
    async fn test_delete_user_not_found() {
        let mut repository = MockTestUserRepository::new();

        repository
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(None));
        repository.expect_delete().times(0);

        let service = UserService::new(Arc::new(repository));

        let result = service.delete_user(UserId(42)).await;
        assert!(matches!(result.unwrap_err(), UserError::NotFound(42)));
    }
}
