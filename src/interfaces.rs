//! インターフェース層
//!
//! HTTP によるユーザーインターフェース

pub mod web;
