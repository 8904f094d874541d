//! Coin catalog: sprite filenames and display labels
//!
//! The simulation references coins by pool index; everything filesystem-
//! or DOM-facing (paths, image elements) stays in the render adapter.

use crate::sim::ItemKind;

/// Good coin sprite filenames (collectible)
pub const GOOD_COINS: [&str; 6] = [
    "bitcoin.png",
    "bitcoin-cash.png",
    "bitcoin-sv.png",
    "ethereum.png",
    "tether.png",
    "litecoin.png",
];

/// Bad coin sprite filenames (touching one ends the game)
pub const BAD_COINS: [&str; 7] = [
    "cardano.png",
    "cosmos.png",
    "dogecoin.png",
    "polkadot.png",
    "shiba-inu.png",
    "uniswap.png",
    "xrp.png",
];

/// Sprite pool for a coin category
pub fn pool(kind: ItemKind) -> &'static [&'static str] {
    match kind {
        ItemKind::Good => &GOOD_COINS,
        ItemKind::Bad => &BAD_COINS,
    }
}

/// Relative sprite path for a coin, e.g. `images/goodCoins/bitcoin.png`
pub fn sprite_path(kind: ItemKind, file: &str) -> String {
    let dir = match kind {
        ItemKind::Good => "goodCoins",
        ItemKind::Bad => "badCoins",
    };
    format!("images/{dir}/{file}")
}

/// Derive a display label from a sprite filename:
/// strip the extension, hyphens become spaces, title-case each word.
pub fn display_name(file: &str) -> String {
    let stem = file.split('.').next().unwrap_or(file);
    stem.split('-')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
