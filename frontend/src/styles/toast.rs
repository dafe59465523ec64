use super::colors::{PLAIN_WHITE, PRIMARY_DARK_GRAY};

pub fn toast_style() -> String {
    format!(
        r#"
.toast-msg {{
  position: fixed;
  left: 50%;
  bottom: 24px;
  transform: translateX(-50%);
  min-width: 280px;
  padding: 14px 16px;
  border-radius: 4px;
  background: {gray};
  color: {white};
  z-index: 20;
  animation: fadeIn 0.2s;
}}
"#,
        gray = PRIMARY_DARK_GRAY,
        white = PLAIN_WHITE,
    )
}
