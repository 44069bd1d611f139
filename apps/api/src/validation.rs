//! # バリデーションレジストリ
//!
//! 後続のリクエストハンドラが名前で参照するカスタムバリデーションルールを、
//! プロセス起動時に一度だけ登録する。
//!
//! ## 契約
//!
//! - [`init`] は冪等: 何度呼んでも登録はプロセスごとに最大 1 回
//! - 初期化後のレジストリは不変（実行時のルール追加・削除はしない）
//!
//! 各ルールは `validator` クレートのカスタム関数
//! （`fn(&str) -> Result<(), ValidationError>`）であり、
//! `#[validate(custom(function = ...))]` から直接参照することもできる。

use std::sync::OnceLock;

use validator::ValidationError;

/// カスタムバリデーション関数の型
pub type ValidatorFn = fn(&str) -> Result<(), ValidationError>;

/// 名前付きバリデーションルールのレジストリ
#[derive(Debug)]
pub struct ValidatorRegistry {
    rules: Vec<(&'static str, ValidatorFn)>,
}

impl ValidatorRegistry {
    fn new() -> Self {
        Self {
            rules: vec![
                ("version_prefix", validate_version_prefix as ValidatorFn),
                ("slug", validate_slug as ValidatorFn),
            ],
        }
    }

    /// 名前でルールを取得する
    pub fn get(&self, name: &str) -> Option<ValidatorFn> {
        self.rules
            .iter()
            .find(|(rule_name, _)| *rule_name == name)
            .map(|(_, f)| *f)
    }

    /// 登録済みルール名の一覧
    pub fn names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|(name, _)| *name).collect()
    }

    /// 登録済みルール数
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// レジストリが空かどうか
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

static REGISTRY: OnceLock<ValidatorRegistry> = OnceLock::new();

/// バリデーションレジストリを初期化する
///
/// プロセスごとに最大 1 回だけ登録が行われ、2 回目以降の呼び出しは
/// 既存のレジストリを返すだけの no-op になる。
pub fn init() -> &'static ValidatorRegistry {
    REGISTRY.get_or_init(ValidatorRegistry::new)
}

/// ルートグループプレフィックスの形式を検証する
///
/// 先頭が `/` で、残りが英数字・ハイフン・スラッシュのみであること。
pub fn validate_version_prefix(value: &str) -> Result<(), ValidationError> {
    let rest = value
        .strip_prefix('/')
        .ok_or_else(|| ValidationError::new("version_prefix"))?;

    let valid = !rest.is_empty()
        && rest
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '/');
    if !valid {
        return Err(ValidationError::new("version_prefix"));
    }
    Ok(())
}

/// スラグ（小文字識別子）の形式を検証する
///
/// 小文字英数字とハイフンのみ、非空であること。
pub fn validate_slug(value: &str) -> Result<(), ValidationError> {
    let valid = !value.is_empty()
        && value
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-');
    if !valid {
        return Err(ValidationError::new("slug"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use validator::Validate;

    use super::*;

    // ===== init テスト =====

    #[test]
    fn test_initが冪等で同一のレジストリを返す() {
        let first = init();
        let second = init();

        // 2 回目以降は同じインスタンス（再登録されない）
        assert!(std::ptr::eq(first, second));
        assert_eq!(first.len(), 2);
        assert!(!first.is_empty());
    }

    #[test]
    fn test_登録済みルールを名前で取得できる() {
        let registry = init();

        assert!(registry.get("version_prefix").is_some());
        assert!(registry.get("slug").is_some());
        assert!(registry.get("unknown").is_none());
        assert_eq!(registry.names(), vec!["version_prefix", "slug"]);
    }

    #[test]
    fn test_レジストリ経由で取得したルールが機能する() {
        let rule = init().get("slug").unwrap();

        assert!(rule("my-service").is_ok());
        assert!(rule("My-Service").is_err());
    }

    // ===== validate_version_prefix テスト =====

    #[test]
    fn test_version_prefix_正しい形式を受理する() {
        assert!(validate_version_prefix("/v1").is_ok());
        assert!(validate_version_prefix("/api/v2").is_ok());
        assert!(validate_version_prefix("/v1-beta").is_ok());
    }

    #[test]
    fn test_version_prefix_不正な形式を拒否する() {
        assert!(validate_version_prefix("v1").is_err(), "先頭スラッシュ必須");
        assert!(validate_version_prefix("/").is_err(), "空のプレフィックス");
        assert!(validate_version_prefix("/v 1").is_err(), "空白は不可");
        assert!(validate_version_prefix("").is_err());
    }

    // ===== validate_slug テスト =====

    #[test]
    fn test_slug_正しい形式を受理する() {
        assert!(validate_slug("kiban-api").is_ok());
        assert!(validate_slug("demo2").is_ok());
    }

    #[test]
    fn test_slug_不正な形式を拒否する() {
        assert!(validate_slug("").is_err());
        assert!(validate_slug("Kiban").is_err());
        assert!(validate_slug("kiban_api").is_err());
    }

    // ===== derive(Validate) との統合 =====

    #[derive(Debug, Validate)]
    struct RouteGroupInput {
        #[validate(custom(function = validate_version_prefix))]
        prefix: String,
    }

    #[test]
    fn test_deriveのcustom関数として使用できる() {
        let ok = RouteGroupInput {
            prefix: "/v1".to_string(),
        };
        let ng = RouteGroupInput {
            prefix: "v1".to_string(),
        };

        assert!(ok.validate().is_ok());
        assert!(ng.validate().is_err());
    }
}
