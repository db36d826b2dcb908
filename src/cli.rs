use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "comedo-check")]
#[command(about = "Flag comedogenic (pore-clogging) ingredients in a product's ingredient list", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// 成分データベース（ファイルパスまたはURL）。設定ファイルより優先
    #[arg(long, global = true)]
    pub db: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 成分リストをチェック
    Check {
        /// 成分リスト（省略時は --file または標準入力）
        text: Option<String>,

        /// 成分リストのテキストファイル
        #[arg(short, long, conflicts_with = "text")]
        file: Option<PathBuf>,

        /// 出力形式 (text/json)
        #[arg(long, default_value = "text")]
        format: OutputFormat,

        /// 括弧除去後にも文字数判定を行う
        #[arg(long)]
        strict: bool,

        /// この評価値以上の成分があれば終了コード1
        #[arg(long, value_parser = clap::value_parser!(u8).range(0..=5))]
        fail_on: Option<u8>,
    },

    /// チェック結果をJSON/Excelに出力
    Export {
        /// 成分リストのテキストファイル
        #[arg(required = true)]
        input: PathBuf,

        /// 出力形式 (json/excel/both)
        #[arg(short, long, default_value = "both")]
        format: ExportFormat,

        /// 出力ファイル/ディレクトリ
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// ドキュメントタイトル
        #[arg(short, long, default_value = "ingredient-check")]
        title: String,
    },

    /// データベースの成分を名前・別名で検索
    Lookup {
        #[arg(required = true)]
        query: String,
    },

    /// 設定を表示/編集
    Config {
        /// データベースの参照先を設定
        #[arg(long)]
        set_db: Option<String>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown format: {}. Use text or json", s)),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Excel,
    #[default]
    Both,
}

impl std::str::FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(ExportFormat::Json),
            "excel" | "xlsx" => Ok(ExportFormat::Excel),
            "both" => Ok(ExportFormat::Both),
            _ => Err(format!("Unknown format: {}. Use json, excel, or both", s)),
        }
    }
}
