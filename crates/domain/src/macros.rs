/// フォーム入力値の String Newtype を定義する宣言型マクロ
///
/// 以下のボイラープレートを一括生成する:
/// - Newtype 構造体（`String` をラップ）
/// - `parse()`: trim して空なら `None`、それ以外は値を作成
/// - `as_str()`: 文字列参照
/// - `into_string()`: 所有権を持つ文字列に変換
///
/// # PII モード
///
/// `pii: true` を指定すると PII 保護モードになる:
/// - `Debug` 出力を `[REDACTED]` にマスクする
/// - `Display` impl を生成しない（平文出力を防止）
///
/// `pii` を指定しない場合（デフォルト）:
/// - `derive(Debug)` で通常の Debug 出力
/// - `Display` impl を生成（平文出力）
///
/// # 使用例
///
/// ```rust
/// use rajo_domain::submission::SubmitterName;
///
/// let name = SubmitterName::parse("  Ada Lovelace ").unwrap();
/// assert_eq!(name.as_str(), "Ada Lovelace");
/// // Debug 出力はマスクされる（PII 保護）
/// assert!(format!("{:?}", name).contains("[REDACTED]"));
/// // 空白のみは値として扱わない
/// assert!(SubmitterName::parse("   ").is_none());
/// ```
macro_rules! define_form_text {
    // PII アーム: Debug をマスク、Display を生成しない
    (
        $(#[$meta:meta])*
        $vis:vis struct $Name:ident { pii: true $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Clone, PartialEq, Eq)]
        $vis struct $Name(String);

        impl std::fmt::Debug for $Name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.debug_tuple(stringify!($Name)).field(&"[REDACTED]").finish()
            }
        }

        _form_text_common!($Name);
    };
    // 非 PII アーム: derive(Debug) + Display 生成
    (
        $(#[$meta:meta])*
        $vis:vis struct $Name:ident;
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq)]
        $vis struct $Name(String);

        _form_text_common!($Name);

        impl std::fmt::Display for $Name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

/// `define_form_text!` の両アームで共有されるメソッドを生成する内部マクロ
macro_rules! _form_text_common {
    ($Name:ident) => {
        impl $Name {
            /// 前後の空白を除去し、空でなければ値を作成する
            pub fn parse(value: &str) -> Option<Self> {
                let value = value.trim();
                if value.is_empty() {
                    None
                } else {
                    Some(Self(value.to_string()))
                }
            }

            /// 文字列参照を取得する
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// 所有権を持つ文字列に変換する
            pub fn into_string(self) -> String {
                self.0
            }
        }
    };
}
