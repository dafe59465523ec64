//! Modal dialog used by the resource workflow.

use super::colors::{PLAIN_WHITE, PRIMARY_DARK_GRAY};

pub fn dialog_style() -> String {
    format!(
        r#"
.dialog-scrim {{
  position: fixed;
  inset: 0;
  background: rgba(0, 0, 0, 0.32);
  z-index: 10;
}}

.dialog {{
  position: fixed;
  top: 50%;
  left: 50%;
  transform: translate(-50%, -50%);
  width: min(90vw, 420px);
  padding: 24px;
  border-radius: 4px;
  background: {white};
  z-index: 11;
  animation: fadeIn 0.15s;
}}

.dialog h2 {{
  margin-top: 0;
  color: {gray};
}}

.dialog label {{
  display: block;
  margin-bottom: 16px;
}}

.dialog input[type="text"] {{
  display: block;
  width: 100%;
  box-sizing: border-box;
  padding: 8px;
  margin-top: 4px;
}}

.dialog .helper {{
  font-size: 12px;
  opacity: 0.7;
}}

.dialog-actions {{
  display: flex;
  justify-content: flex-end;
  gap: 8px;
}}
"#,
        white = PLAIN_WHITE,
        gray = PRIMARY_DARK_GRAY,
    )
}
