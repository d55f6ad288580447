//! Game content catalog: characters, maps, skins, acts and friends.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::client::Client;
use crate::error::Result;

pub struct ContentService<'c> {
    client: &'c Client,
}

/// Language tag accepted as a content filter, passed through verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Locale {
    #[serde(rename = "ar-AE")]
    ArAe,
    #[serde(rename = "de-DE")]
    DeDe,
    #[serde(rename = "en-GB")]
    EnGb,
    #[serde(rename = "en-US")]
    EnUs,
    #[serde(rename = "es-ES")]
    EsEs,
    #[serde(rename = "es-MX")]
    EsMx,
    #[serde(rename = "fr-FR")]
    FrFr,
    #[serde(rename = "id-ID")]
    IdId,
    #[serde(rename = "it-IT")]
    ItIt,
    #[serde(rename = "ja-JP")]
    JaJp,
    #[serde(rename = "ko-KR")]
    KoKr,
    #[serde(rename = "pl-PL")]
    PlPl,
    #[serde(rename = "pt-BR")]
    PtBr,
    #[serde(rename = "ru-RU")]
    RuRu,
    #[serde(rename = "th-TH")]
    ThTh,
    #[serde(rename = "tr-TR")]
    TrTr,
    #[serde(rename = "vi-VN")]
    ViVn,
    #[serde(rename = "zh-CN")]
    ZhCn,
    #[serde(rename = "zh-TW")]
    ZhTw,
}

impl Locale {
    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::ArAe => "ar-AE",
            Locale::DeDe => "de-DE",
            Locale::EnGb => "en-GB",
            Locale::EnUs => "en-US",
            Locale::EsEs => "es-ES",
            Locale::EsMx => "es-MX",
            Locale::FrFr => "fr-FR",
            Locale::IdId => "id-ID",
            Locale::ItIt => "it-IT",
            Locale::JaJp => "ja-JP",
            Locale::KoKr => "ko-KR",
            Locale::PlPl => "pl-PL",
            Locale::PtBr => "pt-BR",
            Locale::RuRu => "ru-RU",
            Locale::ThTh => "th-TH",
            Locale::TrTr => "tr-TR",
            Locale::ViVn => "vi-VN",
            Locale::ZhCn => "zh-CN",
            Locale::ZhTw => "zh-TW",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Content catalog response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Content {
    pub version: String,
    pub characters: Vec<ContentItem>,
    pub maps: Vec<AssetItem>,
    pub chromas: Vec<ContentItem>,
    pub skins: Vec<ContentItem>,
    pub skin_levels: Vec<ContentItem>,
    pub equips: Vec<ContentItem>,
    pub game_modes: Vec<AssetItem>,
    pub sprays: Vec<ContentItem>,
    pub spray_levels: Vec<ContentItem>,
    pub charms: Vec<ContentItem>,
    pub charm_levels: Vec<ContentItem>,
    pub player_cards: Vec<ContentItem>,
    pub player_titles: Vec<ContentItem>,
    pub acts: Vec<Act>,
    pub ceremonies: Vec<ContentItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContentItem {
    pub name: String,
    /// Present only when the catalog was requested without a locale filter.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub localized_names: Option<LocalizedNames>,
    pub id: String,
    pub asset_name: String,
}

/// Content item that also carries an asset path (maps and game modes).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetItem {
    #[serde(flatten)]
    pub item: ContentItem,
    #[serde(default)]
    pub asset_path: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Act {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub localized_names: Option<LocalizedNames>,
    pub id: String,
    // The API uses snake_case for this one field.
    #[serde(rename = "is_active")]
    pub is_active: bool,
}

/// Item name in every supported locale.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocalizedNames {
    #[serde(rename = "ar-AE")]
    pub ar_ae: String,
    #[serde(rename = "de-DE")]
    pub de_de: String,
    #[serde(rename = "en-GB")]
    pub en_gb: String,
    #[serde(rename = "en-US")]
    pub en_us: String,
    #[serde(rename = "es-ES")]
    pub es_es: String,
    #[serde(rename = "es-MX")]
    pub es_mx: String,
    #[serde(rename = "fr-FR")]
    pub fr_fr: String,
    #[serde(rename = "id-ID")]
    pub id_id: String,
    #[serde(rename = "it-IT")]
    pub it_it: String,
    #[serde(rename = "ja-JP")]
    pub ja_jp: String,
    #[serde(rename = "ko-KR")]
    pub ko_kr: String,
    #[serde(rename = "pl-PL")]
    pub pl_pl: String,
    #[serde(rename = "pt-BR")]
    pub pt_br: String,
    #[serde(rename = "ru-RU")]
    pub ru_ru: String,
    #[serde(rename = "th-TH")]
    pub th_th: String,
    #[serde(rename = "tr-TR")]
    pub tr_tr: String,
    #[serde(rename = "vi-VN")]
    pub vi_vn: String,
    #[serde(rename = "zh-CN")]
    pub zh_cn: String,
    #[serde(rename = "zh-TW")]
    pub zh_tw: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ContentListOptions {
    pub locale: Option<Locale>,
}

impl ContentListOptions {
    pub(crate) fn query(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(locale) = self.locale {
            pairs.push(("locale", locale.as_str().to_string()));
        }
        pairs
    }
}

impl<'c> ContentService<'c> {
    pub(crate) fn new(client: &'c Client) -> Self {
        ContentService { client }
    }

    /// Lists game content, optionally filtered by locale.
    ///
    /// Valorant API docs: <https://developer.riotgames.com/apis#val-content-v1/GET_getContent>
    pub fn list(&self, opts: Option<&ContentListOptions>) -> Result<Option<Content>> {
        let request = self
            .client
            .get("content/v1/contents")?
            .query(opts.map(|o| o.query()).unwrap_or_default());
        self.client.send(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_options_yield_no_query_parameters() {
        assert!(ContentListOptions::default().query().is_empty());
    }

    #[test]
    fn locale_option_yields_exactly_one_parameter() {
        let opts = ContentListOptions {
            locale: Some(Locale::JaJp),
        };
        assert_eq!(opts.query(), vec![("locale", "ja-JP".to_string())]);
    }

    #[test]
    fn content_round_trips_through_json() {
        let content = Content {
            version: "release-07.01".to_string(),
            characters: vec![ContentItem {
                name: "Jett".to_string(),
                localized_names: Some(LocalizedNames {
                    ja_jp: "ジェット".to_string(),
                    ..LocalizedNames::default()
                }),
                id: "add6443a-41bd-e414-f6ad-e58d267f4e95".to_string(),
                asset_name: "Default__Wind_PrimaryAsset_C".to_string(),
            }],
            maps: vec![AssetItem {
                item: ContentItem {
                    name: "Ascent".to_string(),
                    id: "7eaecc1b-4337-bbf6-6ab9-04b8f06b3319".to_string(),
                    asset_name: "Ascent".to_string(),
                    ..ContentItem::default()
                },
                asset_path: "/Game/Maps/Ascent/Ascent".to_string(),
            }],
            acts: vec![Act {
                name: "EPISODE 7 - ACT 1".to_string(),
                id: "0981a882-4e7d-371a-70c4-c3b4f46c504a".to_string(),
                is_active: true,
                ..Act::default()
            }],
            ..Content::default()
        };

        let json = serde_json::to_string(&content).unwrap();
        let decoded: Content = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, content);
    }

    #[test]
    fn content_decodes_wire_field_names() {
        let json = r#"{
            "version": "release-07.01",
            "skinLevels": [{"name": "x", "id": "1", "assetName": "x"}],
            "maps": [{"name": "Bind", "id": "2", "assetName": "Bind", "assetPath": "/Game/Maps/Bind"}],
            "acts": [{"name": "ACT 1", "id": "3", "is_active": false}]
        }"#;
        let content: Content = serde_json::from_str(json).unwrap();
        assert_eq!(content.skin_levels.len(), 1);
        assert_eq!(content.maps[0].asset_path, "/Game/Maps/Bind");
        assert!(!content.acts[0].is_active);
        assert!(content.characters.is_empty());
    }
}
