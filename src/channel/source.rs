use crate::{
    channel::{
        character_ram::CharacterRamChannel,
        frame::{ColorRamFrame, SCREEN_CELLS, ScreenColorFrame, ScreenFrame},
    },
    charset::set::Charset,
};

/// Border/background colour changes over time.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScreenColorChannel {
    /// Frames in playback order.
    pub frames: Vec<ScreenColorFrame>,
}

/// Per-cell colour RAM changes over time.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ColorRamChannel {
    /// Frames in playback order.
    pub frames: Vec<ColorRamFrame>,
}

/// Kind tag of a [`SourceChannel`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChannelKind {
    /// [`ScreenColorChannel`].
    ScreenColor,
    /// [`ColorRamChannel`].
    ColorRam,
    /// [`CharacterRamChannel`].
    CharacterRam,
}

impl ChannelKind {
    /// Stable display name.
    pub fn name(self) -> &'static str {
        match self {
            Self::ScreenColor => "screen_color",
            Self::ColorRam => "color_ram",
            Self::CharacterRam => "character_ram",
        }
    }
}

/// One independently animated part of the target display.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SourceChannel {
    /// Border/background colours.
    ScreenColor(ScreenColorChannel),
    /// Colour RAM.
    ColorRam(ColorRamChannel),
    /// Screen codes and charsets.
    CharacterRam(CharacterRamChannel),
}

impl SourceChannel {
    /// Kind tag.
    pub fn kind(&self) -> ChannelKind {
        match self {
            Self::ScreenColor(_) => ChannelKind::ScreenColor,
            Self::ColorRam(_) => ChannelKind::ColorRam,
            Self::CharacterRam(_) => ChannelKind::CharacterRam,
        }
    }

    /// Display name of the kind.
    pub fn name(&self) -> &'static str {
        self.kind().name()
    }

    /// Number of frames in the channel.
    pub fn frame_count(&self) -> usize {
        match self {
            Self::ScreenColor(c) => c.frames.len(),
            Self::ColorRam(c) => c.frames.len(),
            Self::CharacterRam(c) => c.frames().len(),
        }
    }
}

/// A whole animation split into channels, at most one per kind.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnimSourceData {
    /// Duration given to imported frames that carry none.
    pub default_frame_duration_ms: u32,
    channels: Vec<SourceChannel>,
}

impl AnimSourceData {
    /// Empty animation.
    pub fn new(default_frame_duration_ms: u32) -> Self {
        Self {
            default_frame_duration_ms,
            channels: Vec::new(),
        }
    }

    /// Channels in creation order.
    pub fn channels(&self) -> &[SourceChannel] {
        &self.channels
    }

    /// Channel of the given kind, if present.
    pub fn channel(&self, kind: ChannelKind) -> Option<&SourceChannel> {
        self.channels.iter().find(|c| c.kind() == kind)
    }

    /// Character-RAM channel, if present.
    pub fn character_ram(&self) -> Option<&CharacterRamChannel> {
        match self.channel(ChannelKind::CharacterRam)? {
            SourceChannel::CharacterRam(c) => Some(c),
            _ => None,
        }
    }

    /// Screen-colour channel, if present.
    pub fn screen_colors(&self) -> Option<&ScreenColorChannel> {
        match self.channel(ChannelKind::ScreenColor)? {
            SourceChannel::ScreenColor(c) => Some(c),
            _ => None,
        }
    }

    /// Colour-RAM channel, if present.
    pub fn color_ram(&self) -> Option<&ColorRamChannel> {
        match self.channel(ChannelKind::ColorRam)? {
            SourceChannel::ColorRam(c) => Some(c),
            _ => None,
        }
    }

    fn channel_mut(&mut self, kind: ChannelKind) -> &mut SourceChannel {
        let idx = match self.channels.iter().position(|c| c.kind() == kind) {
            Some(idx) => idx,
            None => {
                self.channels.push(match kind {
                    ChannelKind::ScreenColor => {
                        SourceChannel::ScreenColor(ScreenColorChannel::default())
                    }
                    ChannelKind::ColorRam => SourceChannel::ColorRam(ColorRamChannel::default()),
                    ChannelKind::CharacterRam => {
                        SourceChannel::CharacterRam(CharacterRamChannel::default())
                    }
                });
                self.channels.len() - 1
            }
        };
        &mut self.channels[idx]
    }

    /// Character-RAM channel, created on first use.
    pub fn character_ram_mut(&mut self) -> &mut CharacterRamChannel {
        match self.channel_mut(ChannelKind::CharacterRam) {
            SourceChannel::CharacterRam(c) => c,
            _ => unreachable!("channel_mut returns the requested kind"),
        }
    }

    /// Screen-colour channel, created on first use.
    pub fn screen_colors_mut(&mut self) -> &mut ScreenColorChannel {
        match self.channel_mut(ChannelKind::ScreenColor) {
            SourceChannel::ScreenColor(c) => c,
            _ => unreachable!("channel_mut returns the requested kind"),
        }
    }

    /// Colour-RAM channel, created on first use.
    pub fn color_ram_mut(&mut self) -> &mut ColorRamChannel {
        match self.channel_mut(ChannelKind::ColorRam) {
            SourceChannel::ColorRam(c) => c,
            _ => unreachable!("channel_mut returns the requested kind"),
        }
    }

    /// Import decoded screens, splitting them into channels.
    ///
    /// Screen codes go to the character-RAM channel tagged with `charset` (deduplicated against
    /// charsets already present), colours go to the screen-colour channel, and colour RAM (when
    /// the screens carry it) to the colour-RAM channel. Once a colour-RAM channel exists it stays
    /// frame-aligned with the character-RAM channel; frames without colour RAM get zeroed entries.
    /// Returns the charset index used.
    #[tracing::instrument(skip(self, screens, charset), fields(count = screens.len()))]
    pub fn import_screens(&mut self, screens: &[ScreenFrame], charset: Option<Charset>) -> usize {
        let default_ms = self.default_frame_duration_ms;
        let duration = |s: &ScreenFrame| {
            if s.duration_ms == 0 {
                default_ms
            } else {
                s.duration_ms
            }
        };

        let frames_before = self.character_ram().map_or(0, |c| c.frames().len());
        let charset_index = self
            .character_ram_mut()
            .add_frames(screens.iter().map(|s| (&s.cells, duration(s))), charset);

        let colors = self.screen_colors_mut();
        colors
            .frames
            .extend(screens.iter().map(|s| ScreenColorFrame {
                border: s.border,
                background: s.background,
                duration_ms: duration(s),
            }));

        if self.color_ram().is_some() || screens.iter().any(|s| s.color_ram.is_some()) {
            let earlier: Vec<u32> = self
                .character_ram()
                .map(|c| c.frames()[..frames_before].iter().map(|f| f.duration_ms).collect())
                .unwrap_or_default();
            let ram = self.color_ram_mut();
            let padding = earlier.get(ram.frames.len()..).unwrap_or_default();
            ram.frames
                .extend(padding.iter().map(|&duration_ms| ColorRamFrame {
                    colors: [0; SCREEN_CELLS],
                    duration_ms,
                }));
            ram.frames.extend(screens.iter().map(|s| ColorRamFrame {
                colors: s.color_ram.unwrap_or([0; SCREEN_CELLS]),
                duration_ms: duration(s),
            }));
        }

        charset_index
    }
}

#[cfg(test)]
#[path = "../../tests/unit/channel/source.rs"]
mod tests;
