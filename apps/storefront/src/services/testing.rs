//! In-memory service fakes shared by the store and command tests.

use async_trait::async_trait;
use shopfront_core::{AvatarFile, Category, Money, Product, User, UserRegister};
use std::sync::Mutex;
use std::time::Duration;

use super::{CatalogService, FileUploader, Notification, Notifier, UserDirectory};
use crate::error::{ServiceError, ServiceResult};

pub fn product(id: i64, cents: i64, category: i64) -> Product {
    Product {
        id,
        name: format!("Product {}", id),
        price: Money::from_cents(cents),
        description: String::new(),
        category: Category {
            id: category,
            name: format!("Category {}", category),
            image: String::new(),
        },
        images: Vec::new(),
    }
}

pub fn status_error(status: u16) -> ServiceError {
    ServiceError::Status {
        method: "GET",
        url: "http://fake.test".to_string(),
        status,
    }
}

/// Catalog that answers after an optional delay.
pub struct FakeCatalog {
    pub products: Vec<Product>,
    pub delay: Duration,
    pub fail_with: Option<u16>,
}

impl FakeCatalog {
    pub fn with(products: Vec<Product>) -> Self {
        FakeCatalog {
            products,
            delay: Duration::ZERO,
            fail_with: None,
        }
    }

    pub fn failing(status: u16) -> Self {
        FakeCatalog {
            products: Vec::new(),
            delay: Duration::ZERO,
            fail_with: Some(status),
        }
    }

    pub fn delayed(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

#[async_trait]
impl CatalogService for FakeCatalog {
    async fn fetch_products(&self) -> ServiceResult<Vec<Product>> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        match self.fail_with {
            Some(status) => Err(status_error(status)),
            None => Ok(self.products.clone()),
        }
    }
}

/// Catalog that never answers.
pub struct HangingCatalog;

#[async_trait]
impl CatalogService for HangingCatalog {
    async fn fetch_products(&self) -> ServiceResult<Vec<Product>> {
        std::future::pending().await
    }
}

/// Uploader that hands out `https://cdn.test/{file_name}` and records calls.
#[derive(Default)]
pub struct FakeUploader {
    pub fail: bool,
    pub calls: Mutex<Vec<Vec<String>>>,
}

impl FakeUploader {
    pub fn failing() -> Self {
        FakeUploader {
            fail: true,
            ..Default::default()
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().map(|c| c.len()).unwrap_or(0)
    }
}

#[async_trait]
impl FileUploader for FakeUploader {
    async fn upload(&self, files: &[AvatarFile]) -> ServiceResult<Vec<String>> {
        let names: Vec<String> = files.iter().map(|f| f.file_name.clone()).collect();
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(names.clone());
        }
        if self.fail {
            return Err(status_error(500));
        }
        Ok(names
            .iter()
            .map(|name| format!("https://cdn.test/{}", name))
            .collect())
    }
}

/// Directory that assigns id 42 and records the registrations it saw.
#[derive(Default)]
pub struct FakeDirectory {
    pub fail: bool,
    pub created: Mutex<Vec<UserRegister>>,
}

impl FakeDirectory {
    pub fn failing() -> Self {
        FakeDirectory {
            fail: true,
            ..Default::default()
        }
    }

    pub fn created(&self) -> Vec<UserRegister> {
        self.created.lock().map(|c| c.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl UserDirectory for FakeDirectory {
    async fn create_user(&self, register: UserRegister) -> ServiceResult<User> {
        if self.fail {
            return Err(status_error(400));
        }
        if let Ok(mut created) = self.created.lock() {
            created.push(register.clone());
        }
        Ok(User {
            id: 42,
            name: register.name,
            email: register.email,
            avatar: register.avatar,
        })
    }
}

/// Notifier that keeps every toast.
#[derive(Default)]
pub struct RecordingNotifier {
    pub sent: Mutex<Vec<Notification>>,
}

impl RecordingNotifier {
    pub fn sent(&self) -> Vec<Notification> {
        self.sent.lock().map(|s| s.clone()).unwrap_or_default()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notification: Notification) {
        if let Ok(mut sent) = self.sent.lock() {
            sent.push(notification);
        }
    }
}
