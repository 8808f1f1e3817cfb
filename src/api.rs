pub mod auth; // 認証サービス（サインアップ）
