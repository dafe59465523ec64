use super::colors::{PRIMARY_BLUE, PRIMARY_GREEN};

pub fn reports_style() -> String {
    format!(
        r#"
.resource-list,
.chart-list {{
  display: flex;
  flex-wrap: wrap;
}}

.default-badge {{
  margin-left: 8px;
  padding: 2px 8px;
  border-radius: 8px;
  font-size: 12px;
  color: white;
  background: {green};
}}

.chart-row {{
  display: grid;
  grid-template-columns: 64px 1fr 48px;
  align-items: center;
  gap: 8px;
  margin: 4px 0;
}}

.chart-bar {{
  height: 14px;
  background: {blue};
  border-radius: 2px;
}}
"#,
        green = PRIMARY_GREEN,
        blue = PRIMARY_BLUE,
    )
}
