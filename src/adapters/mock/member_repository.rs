use crate::domain::{Member, MemberEmail};
use crate::ports::member_repository::{MemberRepository as MemberRepositoryTrait, Result};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Mock implementation of MemberRepository
///
/// Keeps members in memory, keyed by email.
pub struct MemberRepository {
    members: Mutex<BTreeMap<MemberEmail, Member>>,
}

impl MemberRepository {
    pub fn new() -> Self {
        Self {
            members: Mutex::new(BTreeMap::new()),
        }
    }

    /// Add a member for testing purposes
    pub fn add_member(&self, member: Member) {
        self.members().insert(member.email.clone(), member);
    }

    /// Remove a member (used to simulate dangling borrower references)
    pub fn remove_member(&self, email: &MemberEmail) -> Option<Member> {
        self.members().remove(email)
    }

    pub fn get(&self, email: &MemberEmail) -> Option<Member> {
        self.members().get(email).cloned()
    }

    fn members(&self) -> MutexGuard<'_, BTreeMap<MemberEmail, Member>> {
        self.members.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for MemberRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MemberRepositoryTrait for MemberRepository {
    async fn find_by_email(&self, email: &MemberEmail) -> Result<Option<Member>> {
        Ok(self.get(email))
    }

    async fn save(&self, member: Member) -> Result<()> {
        self.add_member(member);
        Ok(())
    }

    async fn count(&self) -> Result<u64> {
        Ok(self.members().len() as u64)
    }
}
