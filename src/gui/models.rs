//! GUIのデータ構造
//!
//! 画面の正となる状態はここに定義した構造体で保持し、親コンポーネントの
//! `Signal` の中でだけ更新する。子コンポーネントはスナップショットを受け取り、
//! 変更の提案をイベントとして返すのみ。

use crate::io::csv_preview::{csv_headers, parse_csv_preview, CsvPreviewTable};
use serde::{Deserialize, Serialize};

/// キーワードモードで1列CSVとして扱う際の列名
pub const KEYWORD_COLUMN: &str = "keyword";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ActiveTab {
    #[default]
    Workflow,
    Analytics,
    SignUp,
}

impl ActiveTab {
    pub const ALL: [ActiveTab; 3] = [ActiveTab::Workflow, ActiveTab::Analytics, ActiveTab::SignUp];

    pub fn label(&self) -> &'static str {
        match self {
            ActiveTab::Workflow => "Workflow",
            ActiveTab::Analytics => "Analytics",
            ActiveTab::SignUp => "Sign Up",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            ActiveTab::Workflow => "🧩",
            ActiveTab::Analytics => "📈",
            ActiveTab::SignUp => "👤",
        }
    }

    /// リダイレクト先のパスから表示するタブを決める
    pub fn from_route(route: &str) -> Self {
        let path = route.split(['?', '#']).next().unwrap_or("");
        match path.trim_end_matches('/') {
            "/analytics" | "/dashboard" => ActiveTab::Analytics,
            "/auth" | "/signup" => ActiveTab::SignUp,
            _ => ActiveTab::Workflow,
        }
    }
}

/// ワークフロー設定画面の状態
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ConfigurationState {
    /// 貼り付け・アップロードされたCSVテキスト
    pub csv_text: String,
    /// アップロード済みファイル名（テキスト入力のみの場合はNone）
    pub uploaded_filename: Option<String>,
    /// CSVのヘッダー（チップの候補）
    pub headers: Vec<String>,
    /// 処理対象として選択された列（トグル順）
    pub selected_columns: Vec<String>,
    /// Web補強（Google Search）の有効化
    pub enrichment_enabled: bool,
    /// キーワードモード
    pub keyword_mode: bool,
}

impl ConfigurationState {
    pub fn new(enrichment_enabled: bool) -> Self {
        Self {
            enrichment_enabled,
            ..Self::default()
        }
    }

    /// CSVテキストを更新する
    ///
    /// ヘッダーが変わった場合は全列を選択状態に戻す。
    pub fn set_csv_text(&mut self, text: String) {
        self.csv_text = text;
        self.refresh_headers();
    }

    fn force_single_header(&self) -> Option<&'static str> {
        self.keyword_mode.then_some(KEYWORD_COLUMN)
    }

    fn refresh_headers(&mut self) {
        let headers = csv_headers(&self.csv_text, self.force_single_header());
        if headers != self.headers {
            tracing::debug!(columns = headers.len(), "🧾 CSV headers changed");
            self.selected_columns = headers.clone();
            self.headers = headers;
        }
    }

    /// ファイルから読み込んだCSVを反映する
    pub fn load_file(&mut self, filename: String, text: String) {
        self.uploaded_filename = Some(filename);
        self.set_csv_text(text);
    }

    /// アップロード済みファイルを取り除く
    pub fn clear_file(&mut self) {
        self.uploaded_filename = None;
        self.set_csv_text(String::new());
    }

    /// チップグループから提案された選択を確定する
    ///
    /// 表示中の候補に無いラベルと重複は取り除く。
    pub fn commit_selection(&mut self, proposed: Vec<String>) {
        let mut committed: Vec<String> = Vec::with_capacity(proposed.len());
        for item in proposed {
            if self.headers.contains(&item) && !committed.contains(&item) {
                committed.push(item);
            }
        }
        self.selected_columns = committed;
    }

    pub fn set_enrichment(&mut self, enabled: bool) {
        self.enrichment_enabled = enabled;
    }

    pub fn set_keyword_mode(&mut self, keyword_mode: bool) {
        self.keyword_mode = keyword_mode;
        self.refresh_headers();
    }

    /// プレビュー用のテーブル
    pub fn preview(&self) -> Option<CsvPreviewTable> {
        parse_csv_preview(&self.csv_text, self.force_single_header())
    }
}
