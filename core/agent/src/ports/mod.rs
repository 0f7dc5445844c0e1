//! Ports & Adapters のポート定義
//!
//! - inbound: CLI がアプリを呼び出すための trait
//! - outbound: アプリが外界（端末・LLM）に依頼するための trait

pub mod inbound;
pub mod outbound;
