//! Stylesheets built in code.
//!
//! Every sheet interpolates the tokens from [`colors`]; [`app_style`]
//! concatenates them for the single `<Style>` tag mounted by the app root.

pub mod colors;
mod base;
mod card;
mod dialog;
mod login_page;
mod reports;
mod toast;

pub use base::core_style;
pub use card::card_style;
pub use dialog::dialog_style;
pub use login_page::login_page_style;
pub use reports::reports_style;
pub use toast::toast_style;

/// All stylesheets, in cascade order.
pub fn app_style() -> String {
    [
        core_style(),
        card_style(),
        toast_style(),
        dialog_style(),
        login_page_style(),
        reports_style(),
    ]
    .concat()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokens_are_interpolated() {
        let css = app_style();
        assert!(css.contains(colors::PRIMARY_BLUE));
        assert!(css.contains(colors::PRIMARY_RED));
        assert!(!css.contains("{blue}"));
        assert!(!css.contains("{{"));
    }

    #[test]
    fn test_braces_balance() {
        let css = app_style();
        let open = css.matches('{').count();
        let close = css.matches('}').count();
        assert_eq!(open, close);
    }
}
