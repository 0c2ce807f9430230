/*
 * Responsibility
 * - HTTP 層から切り離したドメインロジック
 */
pub mod auth;
