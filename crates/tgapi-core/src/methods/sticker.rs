use serde::Serialize;

use crate::types::{Sticker, StickerSet};
use crate::value::{list_of, FromTelegramResult};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GetStickerSet {
    pub name: String,
}

impl GetStickerSet {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

telegram_method!(
    GetStickerSet,
    "getStickerSet",
    Get,
    StickerSet,
    StickerSet::from_telegram_result
);

/// Custom emoji stickers usable as forum topic icons.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GetForumTopicIconStickers {}

telegram_method!(
    GetForumTopicIconStickers,
    "getForumTopicIconStickers",
    Get,
    Vec<Sticker>,
    list_of::<Sticker>
);
