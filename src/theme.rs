/// Light/dark presentation flags. All three flip together on each toggle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ThemeFlags {
    /// `light` class on the page
    pub light: bool,
    /// `sun` class on the icon
    pub sun: bool,
    /// `day` class on the toggle control
    pub day: bool,
}

impl ThemeFlags {
    pub fn toggle(&mut self) {
        self.light = !self.light;
        self.sun = !self.sun;
        self.day = !self.day;
    }

    #[must_use]
    pub fn page_class(&self) -> &'static str {
        if self.light {
            "page light"
        } else {
            "page"
        }
    }

    #[must_use]
    pub fn icon_class(&self) -> &'static str {
        if self.sun {
            "moon sun"
        } else {
            "moon"
        }
    }

    #[must_use]
    pub fn toggle_class(&self) -> &'static str {
        if self.day {
            "tdnn day"
        } else {
            "tdnn"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_dark() {
        let flags = ThemeFlags::default();
        assert_eq!(flags.page_class(), "page");
        assert_eq!(flags.icon_class(), "moon");
        assert_eq!(flags.toggle_class(), "tdnn");
    }

    #[test]
    fn toggle_flips_all_flags() {
        let mut flags = ThemeFlags::default();

        flags.toggle();

        assert_eq!(
            flags,
            ThemeFlags {
                light: true,
                sun: true,
                day: true
            }
        );
        assert_eq!(flags.page_class(), "page light");
        assert_eq!(flags.icon_class(), "moon sun");
        assert_eq!(flags.toggle_class(), "tdnn day");
    }

    #[test]
    fn toggle_twice_restores() {
        let mut flags = ThemeFlags::default();
        flags.toggle();
        flags.toggle();
        assert_eq!(flags, ThemeFlags::default());
    }

    #[test]
    fn flags_flip_independently() {
        let mut flags = ThemeFlags {
            light: true,
            sun: false,
            day: true,
        };

        flags.toggle();

        assert!(!flags.light);
        assert!(flags.sun);
        assert!(!flags.day);
    }
}
