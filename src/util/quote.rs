use rand::seq::IndexedRandom;

/// Stoic quotes posted by `/advice` and the daily quote job.
pub const QUOTES: &[&str] = &[
    "\u{201c}The happiness of your life depends upon the quality of your thoughts.\u{201d} - Marcus Aurelius",
    "\u{201c}It's not what happens to you, but how you react to it that matters.\u{201d} - Epictetus",
    "\u{201c}Luck is what happens when preparation meets opportunity.\u{201d} - Seneca",
    "\u{201c}The man who moves a mountain begins by carrying away small stones.\u{201d} - Confucius",
    "\u{201c}No man is free who is not master of himself.\u{201d} - Epictetus",
    "\u{201c}You have power over your mind, not outside events. Realize this, and you will find strength.\u{201d} - Marcus Aurelius",
    "\u{201c}Discipline is the bridge between goals and accomplishment.\u{201d} - Jim Rohn",
    "\u{201c}Do what is right, not what is easy.\u{201d}",
];

pub fn random_quote() -> &'static str {
    QUOTES.choose(&mut rand::rng()).copied().unwrap_or(QUOTES[0])
}
