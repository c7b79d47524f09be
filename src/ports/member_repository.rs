use crate::domain::{Member, MemberEmail};
use async_trait::async_trait;

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// 会員リポジトリポート
#[async_trait]
pub trait MemberRepository: Send + Sync {
    /// メールアドレスで会員を取得する
    async fn find_by_email(&self, email: &MemberEmail) -> Result<Option<Member>>;

    /// 会員を保存する（新規・更新の両方）
    async fn save(&self, member: Member) -> Result<()>;

    /// 会員総数
    async fn count(&self) -> Result<u64>;
}
