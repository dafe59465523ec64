//! Utility classes available on every page.

use super::colors::{PRIMARY_BLUE, PRIMARY_GREEN, PRIMARY_RED, PRIMARY_WHITE};

pub fn core_style() -> String {
    format!(
        r#"
body {{
  margin: 0;
  font-family: Roboto, "Helvetica Neue", Arial, sans-serif;
  --secondary-background-color: {white};
}}

.center-text {{
  text-align: center;
}}

.center {{
  display: flex;
  justify-content: center;
}}

button {{
  cursor: pointer;
  border: none;
  border-radius: 4px;
  padding: 8px 16px;
  background: {blue};
  color: {white};
  text-transform: uppercase;
  letter-spacing: 0.05em;
}}

button:disabled {{
  opacity: 0.5;
  cursor: default;
}}

button.text-button {{
  background: transparent;
  color: {blue};
}}

.destructive-button {{
  background: {red};
}}

a {{
  color: {blue};
}}

.margin-r-24 {{
  margin-right: 24px;
}}

.margin-r-8 {{
  margin-right: 8px;
}}

.beta {{
  color: {white};
  font-size: 14px;
  padding: 8px;
  line-height: 12px;
  background-color: {green};
}}

/* ANIMATION */
@keyframes fadeIn {{
  0% {{
    opacity: 0;
  }}
  100% {{
    opacity: 1;
  }}
}}
"#,
        white = PRIMARY_WHITE,
        blue = PRIMARY_BLUE,
        red = PRIMARY_RED,
        green = PRIMARY_GREEN,
    )
}
