use super::colors::{PLAIN_WHITE, PRIMARY_LIGHT_GRAY};

pub fn card_style() -> String {
    format!(
        r#"
.card-container {{
  display: block;
  margin: 12px;
}}

.card {{
  background: {white};
  border: 1px solid {gray};
  border-radius: 8px;
  box-shadow: 0 2px 4px rgba(0, 0, 0, 0.12);
  transition: box-shadow 0.3s;
}}

.card:hover {{
  box-shadow: 0 8px 16px rgba(0, 0, 0, 0.2);
}}

.card .container {{
  padding: 16px;
}}
"#,
        white = PLAIN_WHITE,
        gray = PRIMARY_LIGHT_GRAY,
    )
}
