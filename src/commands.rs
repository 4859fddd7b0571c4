//! Static bot commands: welcome, help and the spot list

/// Slash commands understood by the bot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Start,
    Help,
    Spots,
    /// Any other slash command; answered with the help text
    Unknown,
}

impl Command {
    /// Parse a message as a command, `None` when it is not one.
    ///
    /// Accepts the `/command@botname` form used in group chats.
    #[must_use]
    pub fn parse(text: &str) -> Option<Self> {
        let word = text.split_whitespace().next()?;
        let name = word.strip_prefix('/')?;
        let name = name.split_once('@').map_or(name, |(name, _bot)| name);
        let command = match name.to_ascii_lowercase().as_str() {
            "start" => Command::Start,
            "help" => Command::Help,
            "spots" => Command::Spots,
            _ => Command::Unknown,
        };
        Some(command)
    }

    /// Fixed reply in Telegram `Markdown`
    #[must_use]
    pub fn reply_text(self) -> &'static str {
        match self {
            Command::Start => WELCOME_TEXT,
            Command::Help | Command::Unknown => HELP_TEXT,
            Command::Spots => SPOTS_TEXT,
        }
    }
}

const WELCOME_TEXT: &str = concat!(
    "🏄‍♂️ *Aloha! Welcome to Kite Bot Brasil!*\n\n",
    "*How to use:*\n",
    "Send the name of the *beach and state*:\n",
    "• Jericoacoara, Ceará\n",
    "• Barra Grande, Piauí\n",
    "• Atalaia, Sergipe\n\n",
    "*Commands:*\n",
    "/start - Welcome message\n",
    "/help - Help\n",
    "/spots - Popular spots\n\n",
    "*Wind conditions:*\n",
    "• < 8 knots: Very weak 😴\n",
    "• 8-12 knots: Light, beginners/foil 😅\n",
    "• 12-25 knots: Perfect 🚀\n",
    "• 25-30 knots: Strong, small kite ⚡\n",
    "• > 30 knots: Dangerous ☢️",
);

const HELP_TEXT: &str = concat!(
    "*❓ HELP - KITE BOT BRASIL*\n\n",
    "*📋 COMMANDS:*\n",
    "/start - Start the bot\n",
    "/help - Show this message\n",
    "/spots - List of kitesurf spots\n\n",
    "*📍 HOW TO SEARCH:*\n",
    "Type: `Beach, State`\n\n",
    "*Examples:*\n",
    "• Camocim, Ceará\n",
    "• Taiba, Ceará\n",
    "• Genipabu, Rio Grande do Norte\n",
    "• Ubatuba, São Paulo\n\n",
    "*🌤️ ABOUT THE DATA:*\n",
    "• Wind in knots (1 knot = 1.852 km/h)\n",
    "• Live data\n",
    "• Updated automatically",
);

const SPOTS_TEXT: &str = concat!(
    "*🏝️ KITESURF SPOTS IN BRAZIL*\n\n",
    "*🌅 NORTHEAST:*\n",
    "*Ceará:*\n",
    "• Jericoacoara\n",
    "• Preá\n",
    "• Cumbuco\n",
    "• Taiba\n\n",
    "*Rio Grande do Norte:*\n",
    "• São Miguel do Gostoso\n",
    "• Genipabu\n",
    "• Tibau do Sul\n\n",
    "*Piauí:*\n",
    "• Barra Grande\n",
    "• Luis Correia\n",
    "• Praia de Macapá\n\n",
    "*🌊 SOUTH/SOUTHEAST:*\n",
    "*Santa Catarina:*\n",
    "• Florianópolis\n",
    "• Garopaba\n",
    "• Imbituba\n\n",
    "*São Paulo:*\n",
    "• Ubatuba\n",
    "• Ilha Bela",
);
