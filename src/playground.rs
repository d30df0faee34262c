pub const DEFAULT_SNIPPET: &str = r#"<!DOCTYPE html>
<html>
<head>
<style>
  body { font-family: sans-serif; display: grid; place-items: center; height: 90vh; }
  button { padding: 0.6rem 1.2rem; font-size: 1rem; }
</style>
</head>
<body>
  <button id="hello">Click me</button>
  <p id="out"></p>
  <script>
    let clicks = 0;
    document.getElementById('hello').addEventListener('click', () => {
      clicks += 1;
      document.getElementById('out').textContent = `Clicked ${clicks} time(s)`;
    });
  </script>
</body>
</html>
"#;

/// Sandbox flags for the preview frame: scripts run, nothing else.
pub const SANDBOX: &str = "allow-scripts";

/// Editable snippet rendered into a sandboxed frame as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Playground {
    buffer: String,
}

impl Default for Playground {
    fn default() -> Self {
        Self {
            buffer: DEFAULT_SNIPPET.to_string(),
        }
    }
}

impl Playground {
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    pub fn edit(&mut self, text: &str) {
        self.buffer.clear();
        self.buffer.push_str(text);
    }

    /// Document for the frame's `srcdoc`; replaces whatever it showed.
    pub fn run(&self) -> &str {
        &self.buffer
    }

    pub fn reset(&mut self) -> &str {
        self.edit(DEFAULT_SNIPPET);
        self.run()
    }
}
