//! # Contact Service ライブラリ
//!
//! 問い合わせ受付サービスの設定・ハンドラ・ユースケースを公開する。
//! 結合テストからルーターを組み立てられるよう、`app_builder` も公開している。

pub mod app_builder;
pub mod config;
pub mod error;
pub mod handler;
pub mod usecase;
