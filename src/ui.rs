/// Renders the probe page with the current results panel contents.
///
/// `results_html` is inserted verbatim; fragments are escaped when they are rendered.
pub fn render_index(results_html: &str) -> String {
    INDEX_HTML.replace("{{RESULTS}}", results_html)
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Quote Service Probe</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&display=swap');

    :root {
      --bg: #f4f6fb;
      --ink: #1f2933;
      --accent: #3b82f6;
      --accent-dark: #2563eb;
      --panel: #f3f4f6;
      --shadow: 0 18px 48px rgba(31, 41, 51, 0.12);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: var(--bg);
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      display: grid;
      place-items: center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(860px, 100%);
      background: white;
      border-radius: 24px;
      box-shadow: var(--shadow);
      padding: 32px;
      display: grid;
      gap: 20px;
    }

    h1 {
      margin: 0;
      font-size: clamp(1.6rem, 3vw, 2.2rem);
    }

    .subtitle {
      margin: 4px 0 0;
      color: #6b7280;
    }

    button {
      appearance: none;
      border: none;
      border-radius: 6px;
      padding: 8px 16px;
      font-size: 1rem;
      font-weight: 600;
      background: var(--accent);
      color: white;
      cursor: pointer;
    }

    button:hover {
      background: var(--accent-dark);
    }

    #results {
      margin-top: 16px;
      padding: 16px;
      background: var(--panel);
      border-radius: 10px;
      min-height: 3em;
      white-space: pre-wrap;
      font-family: ui-monospace, "SFMono-Regular", monospace;
      font-size: 0.9rem;
    }

    #results p {
      margin: 0 0 12px;
    }

    .status {
      font-size: 0.9rem;
      color: #6b7280;
      min-height: 1.2em;
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <h1>Quote Service Probe</h1>
      <p class="subtitle">Fetches stats and submits a test quote, then shows the raw responses.</p>
    </header>

    <form id="probe-form" method="post" action="/probe/run">
      <button id="test-btn" type="submit">Test API</button>
    </form>

    <div id="results">{{RESULTS}}</div>
    <div class="status" id="status"></div>
  </main>

  <script>
    const resultsEl = document.getElementById('results');
    const statusEl = document.getElementById('status');
    const form = document.getElementById('probe-form');

    const loadResults = async () => {
      const res = await fetch('/api/probe');
      if (!res.ok) {
        throw new Error('Unable to load probe results');
      }
      const snapshot = await res.json();
      resultsEl.innerHTML = snapshot.html;
      return snapshot.settlements;
    };

    const poll = async (target) => {
      for (let attempt = 0; attempt < 40; attempt += 1) {
        const settlements = await loadResults();
        if (settlements >= target) {
          statusEl.textContent = '';
          return;
        }
        await new Promise((resolve) => setTimeout(resolve, 250));
      }
      statusEl.textContent = 'Still waiting on a response...';
    };

    form.addEventListener('submit', async (event) => {
      event.preventDefault();
      try {
        const before = await (await fetch('/api/probe')).json();
        await fetch('/probe/run', { method: 'POST' });
        await poll(before.settlements + 2);
      } catch (err) {
        statusEl.textContent = err.message;
      }
    });
  </script>
</body>
</html>
"#;
