//! List Users Use Case

use std::sync::Arc;

use kernel::page::Page;

use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::error::AuthResult;

/// One page of users, newest first, all redacted
#[derive(Debug)]
pub struct ListUsersOutput {
    pub page: Page,
    pub users: Vec<User>,
}

pub struct ListUsersUseCase<R>
where
    R: UserRepository,
{
    repo: Arc<R>,
    page_size: u64,
}

impl<R> ListUsersUseCase<R>
where
    R: UserRepository,
{
    pub fn new(repo: Arc<R>, page_size: u64) -> Self {
        Self { repo, page_size }
    }

    pub async fn execute(&self, page_index: u64) -> AuthResult<ListUsersOutput> {
        let total = self.repo.count().await?;
        let page = Page::new(total, page_index, self.page_size);

        if page.is_empty() {
            return Ok(ListUsersOutput {
                page,
                users: Vec::new(),
            });
        }

        let users = self
            .repo
            .list(page.offset, page.limit)
            .await?
            .into_iter()
            .map(User::redacted)
            .collect();

        Ok(ListUsersOutput { page, users })
    }
}
