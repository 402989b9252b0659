use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "farmguard")]
#[command(about = "AI-powered plant disease detection and crop guidance", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 植物の写真から病害を検出
    Detect {
        /// 画像ファイル
        #[arg(required = true)]
        image: PathBuf,

        /// 結果ページのリンクだけを出力（表示しない）
        #[arg(long)]
        no_render: bool,

        /// 解析済み画像を保存
        #[arg(long)]
        save_image: Option<PathBuf>,
    },

    /// 土壌・気候データから作物を推薦
    Crop(CropArgs),

    /// 施肥の推薦
    Fertilizer(FertilizerArgs),

    /// 検出結果を表示（`?data=...` 形式のリンクから）
    Results {
        /// `detect` が出力したクエリ (例: "?data=%7B...%7D")
        #[arg(short, long)]
        query: Option<String>,

        /// 結果JSONを直接指定
        #[arg(short, long, conflicts_with = "query")]
        data: Option<String>,

        /// 解析済み画像を保存
        #[arg(long)]
        save_image: Option<PathBuf>,
    },

    /// 入力項目の推奨範囲と選択肢を表示
    Fields,

    /// 設定を表示/編集
    Config {
        /// APIベースURLを設定
        #[arg(long)]
        set_api_url: Option<String>,

        /// タイムアウト（秒）を設定
        #[arg(long)]
        set_timeout: Option<u64>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}

/// 数値はテキストのまま受け取り、フォームと同じ規則でパースする
#[derive(Args, Debug, Default)]
pub struct CropArgs {
    /// 窒素 N (0-140)
    #[arg(long = "n")]
    pub n: Option<String>,

    /// リン P (5-145)
    #[arg(long = "p")]
    pub p: Option<String>,

    /// カリウム K (5-205)
    #[arg(long = "k")]
    pub k: Option<String>,

    /// 気温 °C (8-44)
    #[arg(long)]
    pub temperature: Option<String>,

    /// 湿度 % (14-71)
    #[arg(long)]
    pub humidity: Option<String>,

    /// 土壌pH (3.5-10)
    #[arg(long)]
    pub ph: Option<String>,

    /// 降水量 mm (20-300)
    #[arg(long)]
    pub rainfall: Option<String>,

    /// 対話的に入力
    #[arg(short, long)]
    pub interactive: bool,
}

impl CropArgs {
    /// (項目名, 入力値) の組
    pub fn values(&self) -> Vec<(&'static str, Option<&str>)> {
        vec![
            ("N", self.n.as_deref()),
            ("P", self.p.as_deref()),
            ("K", self.k.as_deref()),
            ("temperature", self.temperature.as_deref()),
            ("humidity", self.humidity.as_deref()),
            ("ph", self.ph.as_deref()),
            ("rainfall", self.rainfall.as_deref()),
        ]
    }
}

#[derive(Args, Debug, Default)]
pub struct FertilizerArgs {
    /// 作物 (Rice, Maize, ...)
    #[arg(long)]
    pub crop_type: Option<String>,

    /// 土壌 (Sandy/Loamy/Black/Red/Clayey)
    #[arg(long)]
    pub soil_type: Option<String>,

    /// 窒素 (0-140)
    #[arg(long)]
    pub nitrogen: Option<String>,

    /// リン (5-145)
    #[arg(long)]
    pub phosphorus: Option<String>,

    /// カリウム (5-205)
    #[arg(long)]
    pub potassium: Option<String>,

    /// 土壌pH (3.5-10)
    #[arg(long)]
    pub ph: Option<String>,

    /// 対話的に入力
    #[arg(short, long)]
    pub interactive: bool,
}

impl FertilizerArgs {
    pub fn values(&self) -> Vec<(&'static str, Option<&str>)> {
        vec![
            ("cropType", self.crop_type.as_deref()),
            ("soilType", self.soil_type.as_deref()),
            ("nitrogen", self.nitrogen.as_deref()),
            ("phosphorus", self.phosphorus.as_deref()),
            ("potassium", self.potassium.as_deref()),
            ("ph", self.ph.as_deref()),
        ]
    }
}
