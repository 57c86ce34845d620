/// What a fresh line reading means for one button.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Transition {
    /// Same level as last cycle.
    Unchanged,
    /// Line left its idle level (button went down).
    Pressed,
    /// Line returned to its idle level. This is the edge that acts.
    Released,
}

/// Classify a reading against the remembered level.
pub fn classify(previous: bool, current: bool, idle_level: bool) -> Transition {
    if previous == current {
        Transition::Unchanged
    } else if current == idle_level {
        Transition::Released
    } else {
        Transition::Pressed
    }
}

/// Line levels of one button.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ButtonLine {
    /// Latest level read this cycle.
    pub current: bool,
    /// Level remembered from the last processed change.
    pub previous: bool,
}

impl ButtonLine {
    /// A line resting at `level`.
    pub const fn at_rest(level: bool) -> Self {
        Self {
            current: level,
            previous: level,
        }
    }
}

/// Line levels of all three buttons, indexed by [`super::ButtonEvent::index`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ButtonStates {
    lines: [ButtonLine; 3],
}

impl ButtonStates {
    /// All lines resting at `idle_level`.
    pub const fn idle(idle_level: bool) -> Self {
        Self {
            lines: [ButtonLine::at_rest(idle_level); 3],
        }
    }

    pub fn line(&self, channel: super::ButtonEvent) -> &ButtonLine {
        &self.lines[channel.index()]
    }

    pub fn line_mut(&mut self, channel: super::ButtonEvent) -> &mut ButtonLine {
        &mut self.lines[channel.index()]
    }
}
