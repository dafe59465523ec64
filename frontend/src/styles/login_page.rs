use super::colors::{PLAIN_WHITE, PRIMARY_BLUE, PRIMARY_DARK_GRAY, PRIMARY_WHITE};

pub fn login_page_style() -> String {
    format!(
        r#"
.top-app-bar {{
  display: flex;
  align-items: center;
  justify-content: space-between;
  padding: 12px 24px;
  background: {white};
  color: {blue};
}}

.top-app-bar nav a {{
  margin-right: 16px;
}}

.login-container {{
  display: grid;
  justify-content: center;
  align-content: center;
  height: 400px;
}}

.login-form {{
  display: flex;
  flex-direction: column;
  gap: 12px;
  height: 250px;
  padding: 24px 16px;
  background-color: var(--secondary-background-color);
  border-radius: 8px;
  border: 1px solid silver;
}}

.toggle-form-text {{
  margin-top: 16px;
  padding: 12px;
  border: 1px solid {white};
  border-radius: 8px;
  background-color: {dark_gray};
  opacity: 0.7;
  color: {plain_white};
}}
"#,
        white = PRIMARY_WHITE,
        blue = PRIMARY_BLUE,
        dark_gray = PRIMARY_DARK_GRAY,
        plain_white = PLAIN_WHITE,
    )
}
