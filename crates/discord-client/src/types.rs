//! Gateway-independent message types.
//!
//! Bot logic builds and inspects these; `render` turns them into serenity
//! builders right before they go over the wire.

/// Buttons Discord accepts in a single action row.
pub const MAX_BUTTONS_PER_ROW: usize = 5;

/// Action rows Discord accepts on a single message.
pub const MAX_ROWS_PER_MESSAGE: usize = 5;

/// Embeds Discord accepts on a single message.
pub const MAX_EMBEDS_PER_MESSAGE: usize = 10;

/// Maximum length of a component custom id.
pub const MAX_CUSTOM_ID_LEN: usize = 100;

/// Maximum length of a button label, in characters.
pub const MAX_BUTTON_LABEL_LEN: usize = 80;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbedField {
    pub name: String,
    pub value: String,
    pub inline: bool,
}

/// Rich embed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Embed {
    pub title: Option<String>,
    pub description: Option<String>,
    pub color: Option<u32>,
    pub fields: Vec<EmbedField>,
    pub footer: Option<String>,
}

impl Embed {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn color(mut self, color: u32) -> Self {
        self.color = Some(color);
        self
    }

    pub fn field(mut self, name: impl Into<String>, value: impl Into<String>, inline: bool) -> Self {
        self.fields.push(EmbedField {
            name: name.into(),
            value: value.into(),
            inline,
        });
        self
    }

    pub fn footer(mut self, text: impl Into<String>) -> Self {
        self.footer = Some(text.into());
        self
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonStyle {
    #[default]
    Primary,
    Secondary,
    Success,
    Danger,
}

/// Interactive button carrying a custom id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Button {
    pub custom_id: String,
    pub label: String,
    pub style: ButtonStyle,
    pub emoji: Option<char>,
}

impl Button {
    /// Primary button. Labels longer than [`MAX_BUTTON_LABEL_LEN`] are cut.
    pub fn new(custom_id: impl Into<String>, label: impl Into<String>) -> Self {
        let mut label = label.into();
        if let Some((end, _)) = label.char_indices().nth(MAX_BUTTON_LABEL_LEN) {
            label.truncate(end);
        }

        Self {
            custom_id: custom_id.into(),
            label,
            style: ButtonStyle::Primary,
            emoji: None,
        }
    }

    pub fn style(mut self, style: ButtonStyle) -> Self {
        self.style = style;
        self
    }

    pub fn emoji(mut self, emoji: char) -> Self {
        self.emoji = Some(emoji);
        self
    }
}

/// A row of up to [`MAX_BUTTONS_PER_ROW`] buttons.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActionRow {
    pub buttons: Vec<Button>,
}

impl ActionRow {
    /// Lay buttons out left to right, starting a new row every
    /// [`MAX_BUTTONS_PER_ROW`] buttons.
    pub fn chunked(buttons: Vec<Button>) -> Vec<ActionRow> {
        buttons
            .chunks(MAX_BUTTONS_PER_ROW)
            .map(|chunk| ActionRow {
                buttons: chunk.to_vec(),
            })
            .collect()
    }
}

/// Outbound message payload.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Reply {
    pub content: Option<String>,
    pub embeds: Vec<Embed>,
    pub components: Vec<ActionRow>,
    /// Only the requesting user sees it. Interaction responses only.
    pub ephemeral: bool,
    /// Message to reply to. Channel messages only.
    pub reply_to: Option<u64>,
}

impl Reply {
    pub fn new() -> Self {
        Self::default()
    }

    /// Plain text reply.
    pub fn text(content: impl Into<String>) -> Self {
        Self::new().content(content)
    }

    /// Plain text reply visible only to the requesting user.
    pub fn ephemeral_text(content: impl Into<String>) -> Self {
        Self::text(content).ephemeral()
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn embed(mut self, embed: Embed) -> Self {
        self.embeds.push(embed);
        self
    }

    pub fn components(mut self, rows: Vec<ActionRow>) -> Self {
        self.components.extend(rows);
        self
    }

    pub fn ephemeral(mut self) -> Self {
        self.ephemeral = true;
        self
    }

    pub fn reply_to(mut self, message_id: u64) -> Self {
        self.reply_to = Some(message_id);
        self
    }

    /// All buttons across every row, in display order.
    pub fn buttons(&self) -> impl Iterator<Item = &Button> {
        self.components.iter().flat_map(|row| row.buttons.iter())
    }
}

/// Handle needed to answer an interaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InteractionRef {
    pub id: u64,
    pub token: String,
}

/// A text message posted in a channel the bot can read.
#[derive(Debug, Clone)]
pub struct TextMessage {
    pub message_id: u64,
    pub channel_id: u64,
    pub author_id: u64,
    pub author_is_bot: bool,
    pub content: String,
}

/// A click on one of the bot's buttons.
#[derive(Debug, Clone)]
pub struct ButtonClick {
    pub interaction: InteractionRef,
    pub user_id: u64,
    pub custom_id: String,
}

/// A slash command invocation.
#[derive(Debug, Clone)]
pub struct SlashInvocation {
    pub interaction: InteractionRef,
    pub user_id: u64,
    pub name: String,
    /// String-valued options as (name, value) pairs.
    pub options: Vec<(String, String)>,
}

impl SlashInvocation {
    /// Value of a string option, if present.
    pub fn option(&self, name: &str) -> Option<&str> {
        self.options
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}

/// Inbound event the bot reacts to.
#[derive(Debug, Clone)]
pub enum BotEvent {
    Message(TextMessage),
    Button(ButtonClick),
    Slash(SlashInvocation),
}

impl BotEvent {
    /// Id of the user who triggered the event.
    pub fn user_id(&self) -> u64 {
        match self {
            BotEvent::Message(msg) => msg.author_id,
            BotEvent::Button(click) => click.user_id,
            BotEvent::Slash(invocation) => invocation.user_id,
        }
    }
}

/// Option of a slash command definition. Only string options are used.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlashOption {
    pub name: String,
    pub description: String,
    pub required: bool,
}

/// Slash command definition registered with Discord.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlashCommand {
    pub name: String,
    pub description: String,
    pub options: Vec<SlashOption>,
}

impl SlashCommand {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            options: Vec::new(),
        }
    }

    pub fn string_option(
        mut self,
        name: impl Into<String>,
        description: impl Into<String>,
        required: bool,
    ) -> Self {
        self.options.push(SlashOption {
            name: name.into(),
            description: description.into(),
            required,
        });
        self
    }
}
