pub fn render_index(date: &str) -> String {
    INDEX_HTML.replace("{{DATE}}", date)
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Ninebot Helper</title>
  <style>
    :root {
      --bg-1: #f4f6f8;
      --bg-2: #dbe7f0;
      --ink: #1f2933;
      --muted: #8a94a0;
      --accent: #16a34a;
      --accent-soft: #dcfce7;
      --warn: #dc2626;
      --warn-soft: #fee2e2;
      --info: #2563eb;
      --info-soft: #dbeafe;
      --card: #ffffff;
      --shadow: 0 18px 44px rgba(31, 41, 51, 0.1);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 55%),
        linear-gradient(160deg, var(--bg-1), #eef2f5 70%);
      color: var(--ink);
      font-family: "Segoe UI", "PingFang SC", "Helvetica Neue", sans-serif;
      display: flex;
      justify-content: center;
      padding: 28px 14px 48px;
    }

    .app {
      width: min(460px, 100%);
      display: grid;
      gap: 18px;
      align-content: start;
    }

    header {
      display: flex;
      align-items: baseline;
      justify-content: space-between;
    }

    h1 {
      margin: 0;
      font-size: 1.6rem;
      letter-spacing: -0.01em;
    }

    .date {
      color: var(--muted);
      font-size: 0.85rem;
    }

    .panel {
      background: var(--card);
      border-radius: 18px;
      box-shadow: var(--shadow);
      padding: 20px;
      display: grid;
      gap: 14px;
    }

    .panel .hint {
      margin: 0;
      color: var(--muted);
      font-size: 0.85rem;
      text-align: center;
    }

    .actions {
      display: grid;
      grid-template-columns: repeat(3, 1fr);
      gap: 10px;
    }

    button {
      border: none;
      border-radius: 12px;
      padding: 12px 0;
      font-size: 0.9rem;
      font-weight: 600;
      cursor: pointer;
      background: #1f2933;
      color: white;
      transition: transform 120ms ease, opacity 120ms ease;
    }

    button.secondary {
      background: #e5e9ed;
      color: var(--ink);
    }

    button:disabled {
      opacity: 0.55;
      cursor: wait;
    }

    button:not(:disabled):active {
      transform: scale(0.97);
    }

    .banner {
      display: none;
      background: var(--warn-soft);
      color: var(--warn);
      border-radius: 12px;
      padding: 12px 14px;
      font-size: 0.85rem;
    }

    .banner.visible {
      display: block;
    }

    .card {
      background: var(--card);
      border-radius: 16px;
      box-shadow: var(--shadow);
      padding: 16px;
      display: grid;
      gap: 12px;
    }

    .card .head {
      display: flex;
      align-items: center;
      justify-content: space-between;
    }

    .card .who {
      display: flex;
      align-items: center;
      gap: 10px;
    }

    .status-icon {
      font-size: 1.3rem;
    }

    .card h3 {
      margin: 0;
      font-size: 0.95rem;
    }

    .card .summary {
      font-size: 0.8rem;
      color: var(--muted);
    }

    .card .summary.error {
      color: var(--warn);
    }

    .streak {
      background: var(--accent-soft);
      color: var(--accent);
      border-radius: 999px;
      padding: 4px 10px;
      font-size: 0.75rem;
      font-weight: 600;
      white-space: nowrap;
    }

    .calendar {
      background: #f7f9fa;
      border-radius: 12px;
      padding: 12px;
    }

    .calendar .month {
      text-align: center;
      font-size: 0.75rem;
      color: var(--muted);
      margin-bottom: 8px;
    }

    .grid {
      display: grid;
      grid-template-columns: repeat(7, 1fr);
      gap: 4px;
      text-align: center;
    }

    .grid .head-cell {
      font-size: 0.65rem;
      color: var(--muted);
    }

    .cell {
      height: 28px;
      display: flex;
      align-items: center;
      justify-content: center;
      border-radius: 8px;
      font-size: 0.75rem;
    }

    .cell.checked {
      background: var(--accent);
      color: white;
      font-weight: 700;
    }

    .cell.today:not(.checked) {
      background: var(--info-soft);
      color: var(--info);
      font-weight: 700;
    }

    .cell.future {
      opacity: 0.35;
    }

    details {
      border-top: 1px solid #eef1f4;
      padding-top: 10px;
    }

    summary {
      cursor: pointer;
      font-size: 0.8rem;
      color: var(--muted);
    }

    .log-line {
      display: flex;
      justify-content: space-between;
      gap: 12px;
      font-size: 0.75rem;
      padding: 4px 0;
    }

    .log-line .k {
      color: var(--muted);
      white-space: nowrap;
    }

    .log-line .v {
      color: var(--ink);
      text-align: right;
      word-break: break-all;
    }

    .placeholder {
      text-align: center;
      color: var(--muted);
      font-size: 0.85rem;
      padding: 28px 0;
    }
  </style>
</head>
<body>
  <div class="app">
    <header>
      <h1>Ninebot Helper</h1>
      <span class="date">{{DATE}}</span>
    </header>

    <section class="panel">
      <div class="actions">
        <button id="btn-check" class="secondary">Check</button>
        <button id="btn-sign">Sign in</button>
        <button id="btn-bark" class="secondary">Push</button>
      </div>
      <p class="hint" id="hint">Status check runs automatically on load.</p>
    </section>

    <div class="banner" id="banner"></div>
    <div id="results">
      <div class="placeholder">Waiting for the first status check...</div>
    </div>
  </div>

  <script>
    const resultsEl = document.getElementById('results');
    const bannerEl = document.getElementById('banner');
    const hintEl = document.getElementById('hint');
    const buttons = ['check', 'sign', 'bark'].map((a) => document.getElementById('btn-' + a));

    const setBusy = (busy) => {
      buttons.forEach((b) => { b.disabled = busy; });
      hintEl.textContent = busy ? 'Talking to the check-in service...' : 'Done.';
    };

    const showError = (message) => {
      bannerEl.textContent = message;
      bannerEl.classList.add('visible');
    };

    const clearError = () => bannerEl.classList.remove('visible');

    const run = async (action) => {
      setBusy(true);
      clearError();
      try {
        const res = await fetch('/api/sign?action=' + action, { method: 'POST' });
        const json = await res.json();
        if (!res.ok) {
          showError(json.error || 'Request failed');
          return;
        }
        await renderResults(json.results);
      } catch (err) {
        showError(err.message);
      } finally {
        setBusy(false);
      }
    };

    const loadCalendar = async (days, signed) => {
      const params = new URLSearchParams({ consecutiveDays: days, signedToday: signed });
      const res = await fetch('/api/calendar?' + params);
      if (!res.ok) throw new Error('calendar request failed');
      return res.json();
    };

    const calendarHtml = (view) => {
      const heads = ['S', 'M', 'T', 'W', 'T', 'F', 'S']
        .map((h) => `<div class="head-cell">${h}</div>`)
        .join('');
      const cells = view.cells.map((cell) => {
        if (cell.day === null) return '<div></div>';
        const classes = ['cell'];
        if (cell.checked) classes.push('checked');
        if (cell.isToday) classes.push('today');
        if (cell.isFuture) classes.push('future');
        return `<div class="${classes.join(' ')}">${cell.day}</div>`;
      }).join('');
      return `<div class="calendar">
        <div class="month">${view.label}</div>
        <div class="grid">${heads}${cells}</div>
      </div>`;
    };

    const logsHtml = (logs) => logs.map((log) =>
      `<div class="log-line"><span class="k">${log.name}</span><span class="v">${log.value}</span></div>`
    ).join('');

    const renderResults = async (results) => {
      const cards = await Promise.all(results.map(async (item) => {
        const icons = { success: '✅', skipped: '👌', waiting: '⏳', error: '❌' };
        const isError = item.status === 'error';
        let calendar = '';
        if (!isError) {
          const signed = item.status === 'success' || item.status === 'skipped';
          try {
            calendar = calendarHtml(await loadCalendar(item.consecutiveDays || 0, signed));
          } catch (err) {
            calendar = '';
          }
        }
        const streak = item.consecutiveDays > 0
          ? `<span class="streak">streak ${item.consecutiveDays}d</span>`
          : '';
        return `<article class="card">
          <div class="head">
            <div class="who">
              <span class="status-icon">${icons[item.status] || '❔'}</span>
              <div>
                <h3>${item.name}</h3>
                <div class="summary${isError ? ' error' : ''}">${item.summary}</div>
              </div>
            </div>
            ${streak}
          </div>
          ${calendar}
          <details>
            <summary>Logs (${item.logs.length})</summary>
            ${logsHtml(item.logs)}
          </details>
        </article>`;
      }));
      resultsEl.innerHTML = cards.join('');
    };

    document.getElementById('btn-check').addEventListener('click', () => run('check'));
    document.getElementById('btn-sign').addEventListener('click', () => run('sign'));
    document.getElementById('btn-bark').addEventListener('click', () => run('bark'));

    run('check');
  </script>
</body>
</html>
"#;
