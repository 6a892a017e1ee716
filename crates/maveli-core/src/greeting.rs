//! King Mahabali's remark generator.
//!
//! One template pool per verdict; a template is picked uniformly at
//! random and the submitted name is interpolated verbatim (original case
//! and whitespace). The RNG is passed in by the caller so tests can seed
//! it and assert an exact pick.

use rand::{Rng, RngExt};

/// `{name}` is replaced with the visitor's name as submitted.
const REAL_NAME_COMMENTS: [&str; 5] = [
    "King Mahabali is impressed! \"{name}\" sounds like a name worthy of the royal court! 👑",
    "Excellent choice, {name}! Your parents clearly had good taste in names. The king approves! ✨",
    "{name}, what a beautiful name! Even the Devas are nodding in approval! 🌟",
    "Wonderful! {name} has such a melodious ring to it - perfect for the Onam festivities! 🎵",
    "{name}, your name carries the wisdom of ages. King Mahabali welcomes you with open arms! 🤗",
];

const FAKE_NAME_COMMENTS: [&str; 6] = [
    "\"{name}\"? Really? 😏 King Mahabali has seen many creative names in his time, but this one takes the crown! Still, you're welcome! 👑",
    "Ah \"{name}\", how... unique! 🤔 The king appreciates creativity, even in nomenclature! Welcome to the party! 🎉",
    "\"{name}\" - now that's what we call thinking outside the coconut! 🥥 Mahabali laughs heartily and welcomes you anyway! 😄",
    "Creative name choice, \"{name}\"! 🎭 Did you perhaps consult the royal jester for naming advice? Either way, the celebration continues! 🎊",
    "\"{name}\"... interesting! 🧐 King Mahabali has ruled for eons and has never heard that one before! Points for originality! ⭐",
    "Well hello there, \"{name}\"! 😂 That's either a very avant-garde name or someone got creative at the keyboard! Welcome regardless! 🌸",
];

/// Pick a remark for `name` under the given verdict.
pub fn comment_for(name: &str, is_real: bool, rng: &mut impl Rng) -> String {
    let pool: &[&str] = if is_real {
        &REAL_NAME_COMMENTS
    } else {
        &FAKE_NAME_COMMENTS
    };
    pool[rng.random_range(0..pool.len())].replace("{name}", name)
}

/// Every remark [`comment_for`] can produce for `name` under the given
/// verdict. Callers that cannot control the RNG assert membership here.
pub fn comment_pool(name: &str, is_real: bool) -> Vec<String> {
    let pool: &[&str] = if is_real {
        &REAL_NAME_COMMENTS
    } else {
        &FAKE_NAME_COMMENTS
    };
    pool.iter().map(|t| t.replace("{name}", name)).collect()
}

// ── Tests ──────────────────────────────────────────────────────────────────────
