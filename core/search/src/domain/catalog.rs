//! 固定の定数（既定値・既知の選択肢・画像 URL 規約）

/// カードタイプフィルタの既定値
pub const DEFAULT_CARD_TYPE: &str = "Digimon";

/// カード検索に必ず付けるシリーズ指定
pub const CARD_SERIES: &str = "Digimon Card Game";

/// カード画像のホスト（`{base}/{id}.webp`）
pub const CARD_IMAGE_BASE_URL: &str = "https://images.digimoncard.io/images/cards";

/// 明るい文字色が必要な背景色
pub const DARK_BACKGROUND_COLORS: [&str; 5] = ["Black", "Purple", "Blue", "Red", "Green"];

/// クリーチャー API が返す既知のレベル（補完・一覧表示用。これ以外も受け付ける）
pub const CREATURE_LEVELS: [&str; 8] = [
    "Fresh",
    "In Training",
    "Training",
    "Rookie",
    "Champion",
    "Ultimate",
    "Mega",
    "Armor",
];

/// カード API の既知のタイプ
pub const CARD_TYPES: [&str; 4] = ["Digimon", "Option", "Tamer", "Digi-Egg"];

/// カード ID から画像 URL を組み立てる
pub fn card_image_url(id: &str) -> String {
    format!("{}/{}.webp", CARD_IMAGE_BASE_URL, id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_image_url() {
        assert_eq!(
            card_image_url("BT1-010"),
            "https://images.digimoncard.io/images/cards/BT1-010.webp"
        );
    }

    #[test]
    fn test_default_card_type_is_known() {
        assert!(CARD_TYPES.contains(&DEFAULT_CARD_TYPE));
    }
}
