use crate::profile::GeneralProfileInput;
use crate::view::View;

pub fn render_page(view: View) -> String {
    let (body, script) = match view {
        View::Landing => (LANDING_BODY.to_string(), ""),
        View::Individual => (render_individual(), INDIVIDUAL_SCRIPT),
        View::Industrial => (INDUSTRIAL_BODY.to_string(), INDUSTRIAL_SCRIPT),
    };

    SHELL_HTML
        .replace("{{TITLE}}", view.title())
        .replace("{{VIEW}}", view.as_str())
        .replace("{{BODY}}", &body)
        .replace("{{SCRIPT}}", script)
}

fn render_individual() -> String {
    let defaults = GeneralProfileInput::form_defaults();
    INDIVIDUAL_BODY
        .replace("{{TRAVEL}}", &defaults.daily_travel_km.to_string())
        .replace("{{ELECTRICITY}}", &defaults.electricity_usage_kwh.to_string())
        .replace("{{SHOPPING}}", &defaults.shopping_score.to_string())
}

const SHELL_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>{{TITLE}}</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&family=Fraunces:wght@600&display=swap');

    :root {
      --bg-1: #0a0f1a;
      --bg-2: #12324a;
      --ink: #e8f1ee;
      --muted: #8aa2a0;
      --accent: #34d399;
      --accent-2: #38bdf8;
      --card: rgba(17, 27, 41, 0.88);
      --shadow: 0 24px 60px rgba(0, 0, 0, 0.35);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 60%),
        linear-gradient(135deg, var(--bg-1), #0d1b2a 60%, #0a0f1a 100%);
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      display: grid;
      place-items: center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(960px, 100%);
      background: var(--card);
      border-radius: 28px;
      box-shadow: var(--shadow);
      padding: 36px;
      display: grid;
      gap: 28px;
    }

    h1 {
      font-family: "Fraunces", "Georgia", serif;
      font-weight: 600;
      font-size: clamp(2rem, 4vw, 2.6rem);
      margin: 0;
    }

    h2 {
      margin: 0 0 12px;
      font-size: 1.25rem;
    }

    .subtitle {
      margin: 0;
      color: var(--muted);
    }

    nav {
      display: flex;
      gap: 8px;
    }

    nav a {
      color: var(--accent-2);
      text-decoration: none;
      font-weight: 600;
    }

    .grid {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(260px, 1fr));
      gap: 16px;
    }

    .card {
      background: rgba(255, 255, 255, 0.04);
      border-radius: 18px;
      padding: 18px;
      border: 1px solid rgba(255, 255, 255, 0.08);
      display: grid;
      gap: 10px;
    }

    label {
      display: grid;
      gap: 4px;
      font-size: 0.9rem;
      color: var(--muted);
    }

    input, select, textarea {
      background: #0a0f1a;
      color: var(--ink);
      border: 1px solid rgba(255, 255, 255, 0.15);
      border-radius: 10px;
      padding: 8px 10px;
      font: inherit;
    }

    button {
      appearance: none;
      border: none;
      border-radius: 999px;
      padding: 12px 18px;
      font-size: 1rem;
      font-weight: 600;
      cursor: pointer;
      background: var(--accent);
      color: #06281d;
    }

    button:disabled {
      opacity: 0.6;
      cursor: progress;
    }

    .value {
      font-size: 1.6rem;
      font-weight: 600;
      color: var(--accent);
    }

    .rec {
      display: flex;
      gap: 10px;
      align-items: flex-start;
    }

    .rec .impact {
      font-size: 0.8rem;
      text-transform: uppercase;
      letter-spacing: 0.1em;
      color: var(--accent-2);
    }

    pre {
      white-space: pre-wrap;
      margin: 0;
      font-family: inherit;
    }

    table {
      width: 100%;
      border-collapse: collapse;
    }

    td, th {
      text-align: left;
      padding: 6px 4px;
      border-bottom: 1px solid rgba(255, 255, 255, 0.08);
    }

    .swatch {
      display: inline-block;
      width: 10px;
      height: 10px;
      border-radius: 50%;
      margin-right: 6px;
    }
  </style>
</head>
<body data-view="{{VIEW}}">
  <main class="app">
    <header>
      <nav>
        <a href="/?view=landing">Home</a>
        <a href="/?view=individual">Individual</a>
        <a href="/?view=industrial">Industrial</a>
      </nav>
      <h1>{{TITLE}}</h1>
    </header>
{{BODY}}
  </main>
  <script>
    const postJson = async (url, payload) => {
      const res = await fetch(url, {
        method: 'POST',
        headers: { 'Content-Type': 'application/json' },
        body: JSON.stringify(payload),
      });
      const body = await res.json();
      if (!res.ok) {
        throw new Error(body.error || 'Request failed');
      }
      return body;
    };

    const fmt = (value, digits = 3) => Number(value).toFixed(digits);
{{SCRIPT}}
  </script>
</body>
</html>
"#;

const LANDING_BODY: &str = r#"    <p class="subtitle">Estimate greenhouse-gas emissions for your lifestyle or your industry.</p>
    <section class="grid">
      <a class="card" href="/?view=individual">
        <h2>Individual</h2>
        <span class="subtitle">Diet, electricity, travel and devices, plus receipt scanning and situation analysis.</span>
      </a>
      <a class="card" href="/?view=industrial">
        <h2>Industrial</h2>
        <span class="subtitle">Sector emissions forecasts and a global risk heatmap.</span>
      </a>
    </section>"#;

const INDIVIDUAL_BODY: &str = r#"    <section class="grid">
      <form class="card" id="footprint-form">
        <h2>Smart Impact Calculator</h2>
        <label>Diet Type
          <select name="dietType">
            <option value="">Average Omnivore (2.8t CO2/month)</option>
            <option value="vegan">Vegan (1.5t CO2/month)</option>
            <option value="vegetarian">Vegetarian (1.7t CO2/month)</option>
            <option value="no-beef">No Beef (2.5t CO2/month)</option>
            <option value="omnivore">Average Omnivore (2.8t CO2/month)</option>
            <option value="high-meat">Meat Consumer (3.3t CO2/month)</option>
          </select>
        </label>
        <label>Monthly Electricity (kWh)<input name="electricityKwh" inputmode="decimal" /></label>
        <label>Travel Mode
          <select name="travelMode">
            <option value="">None</option>
            <option value="rail-above">Above Ground Rail</option>
            <option value="rail-below">Below Ground Rail</option>
            <option value="bus">Bus</option>
            <option value="motorbike">Motorbike</option>
            <option value="car">Car</option>
            <option value="suv">SUV</option>
          </select>
        </label>
        <label>Monthly Distance (km)<input name="travelDistanceKm" inputmode="decimal" /></label>
        <label>Device
          <select name="deviceType">
            <option value="">None</option>
            <option value="laptop">Laptop</option>
            <option value="desktop">Desktop</option>
            <option value="phone">Mobile Phone</option>
            <option value="tablet">Tablet</option>
            <option value="tv">Television</option>
          </select>
        </label>
        <label>Hours per Day<input name="deviceHoursPerDay" inputmode="decimal" /></label>
        <button type="submit">Calculate Impact</button>
      </form>
      <div class="card" id="footprint-result">
        <h2>Your Monthly Footprint</h2>
        <span class="subtitle">Fill out the calculator to see your breakdown.</span>
      </div>
    </section>

    <section class="grid">
      <form class="card" id="general-form">
        <h2>Your Carbon Profile</h2>
        <label>Daily Travel (km)<input name="dailyTravelKm" type="number" min="0" max="200" value="{{TRAVEL}}" /></label>
        <label>Monthly Electricity (kWh)<input name="electricityUsageKwh" type="number" min="0" max="1500" value="{{ELECTRICITY}}" /></label>
        <label>Diet Type
          <select name="dietType">
            <option>Vegan</option>
            <option>Vegetarian</option>
            <option>Omnivore</option>
            <option>Heavy Meat</option>
          </select>
        </label>
        <label>Shopping Score (1-10)<input name="shoppingScore" type="number" min="1" max="10" value="{{SHOPPING}}" /></label>
        <button type="submit">Calculate Footprint</button>
      </form>
      <div class="card" id="general-result">
        <h2>Daily Emissions</h2>
        <span class="subtitle">Fill out your profile and calculate to see your emissions.</span>
      </div>
    </section>

    <section class="grid">
      <form class="card" id="receipt-form">
        <h2>Receipt Scanner</h2>
        <input type="file" name="files" accept="image/*" multiple />
        <button type="submit">Scan Receipts</button>
        <pre id="receipt-result"></pre>
      </form>
      <form class="card" id="situation-form">
        <h2>AI Situation Analyzer</h2>
        <textarea name="situation" rows="4" placeholder="e.g. Planning a 300 km road trip this weekend"></textarea>
        <button type="submit">Analyze</button>
        <pre id="situation-result"></pre>
      </form>
    </section>"#;

const INDIVIDUAL_SCRIPT: &str = r#"
    const formObject = (form) => Object.fromEntries(new FormData(form).entries());

    const withBusy = async (form, task) => {
      const button = form.querySelector('button');
      button.disabled = true;
      try {
        await task();
      } catch (err) {
        alert(err.message);
      } finally {
        button.disabled = false;
      }
    };

    document.getElementById('footprint-form').addEventListener('submit', (event) => {
      event.preventDefault();
      const form = event.target;
      withBusy(form, async () => {
        const result = await postJson('/api/calculate-footprint', formObject(form));
        const rows = Object.entries(result.breakdown)
          .map(([key, value]) => `<div>${key}: <strong>${fmt(value)} t</strong></div>`)
          .join('');
        const recs = result.recommendations
          .map((rec) => `<div class="rec"><span>${rec.icon}</span><div><div class="impact">${rec.impactLevel} · ${rec.estimatedSaving}</div>${rec.message}</div></div>`)
          .join('');
        document.getElementById('footprint-result').innerHTML = `
          <h2>Your Monthly Footprint</h2>
          <span class="value">${fmt(result.total)} t CO₂</span>
          ${rows}
          ${recs}`;
      });
    });

    document.getElementById('general-form').addEventListener('submit', (event) => {
      event.preventDefault();
      const form = event.target;
      withBusy(form, async () => {
        const body = await postJson('/api/calculate-general', formObject(form));
        const rows = Object.entries(body.result.breakdown)
          .map(([key, value]) => `<div>${key}: <strong>${fmt(value, 2)} kg</strong></div>`)
          .join('');
        const insights = body.insights.insights.map((line) => `<li>${line}</li>`).join('');
        const recs = body.insights.recommendations.map((line) => `<li>${line}</li>`).join('');
        document.getElementById('general-result').innerHTML = `
          <h2>Daily Emissions</h2>
          <span class="value">${fmt(body.projection.daily, 2)} kg CO₂</span>
          <div>Weekly: ${fmt(body.projection.weekly, 2)} kg · Monthly: ${fmt(body.projection.monthly, 2)} kg · Yearly: ${fmt(body.projection.yearly, 2)} kg</div>
          ${rows}
          <ul>${insights}</ul>
          <ul>${recs}</ul>`;
      });
    });

    document.getElementById('receipt-form').addEventListener('submit', (event) => {
      event.preventDefault();
      const form = event.target;
      withBusy(form, async () => {
        const res = await fetch('/api/analyze-receipt', { method: 'POST', body: new FormData(form) });
        const body = await res.json();
        if (!res.ok) {
          throw new Error(body.error || 'Request failed');
        }
        document.getElementById('receipt-result').textContent = body.report;
      });
    });

    document.getElementById('situation-form').addEventListener('submit', (event) => {
      event.preventDefault();
      const form = event.target;
      withBusy(form, async () => {
        const body = await postJson('/api/ai-situation', formObject(form));
        document.getElementById('situation-result').textContent = body.analysis;
      });
    });
"#;

const INDUSTRIAL_BODY: &str = r#"    <section class="grid">
      <form class="card" id="sector-form">
        <h2>Sector Analysis</h2>
        <label>Sector
          <select name="sector" required>
            <option value="">Select sector</option>
            <option value="energy">Energy</option>
            <option value="transport">Transport</option>
            <option value="manufacturing">Manufacturing</option>
            <option value="agriculture">Agriculture</option>
          </select>
        </label>
        <label>Country<input name="country" required /></label>
        <label>Year<input name="year" inputmode="numeric" required /></label>
        <button type="submit">Analyze Sector</button>
      </form>
      <div class="card" id="sector-summary">
        <h2>Forecast</h2>
        <span class="subtitle">Choose a sector, country and year.</span>
      </div>
    </section>
    <section class="card" id="sector-heatmap"></section>"#;

const INDUSTRIAL_SCRIPT: &str = r#"
    document.getElementById('sector-form').addEventListener('submit', async (event) => {
      event.preventDefault();
      const payload = Object.fromEntries(new FormData(event.target).entries());
      try {
        const result = await postJson('/api/sector-analysis', payload);
        const predictions = result.predictions
          .map((p) => `<tr><td>${p.year}</td><td>${fmt(p.emissions, 2)}</td><td>${fmt(p.reduction, 1)}%</td><td>${p.riskLevel}</td></tr>`)
          .join('');
        document.getElementById('sector-summary').innerHTML = `
          <h2>${result.sector} · ${result.country} · ${result.year}</h2>
          <span class="value">${result.currentEmissions} Mt CO₂</span>
          <table><tr><th>Year</th><th>Emissions</th><th>Reduction</th><th>Risk</th></tr>${predictions}</table>
          ${result.predictions.map((p) => `<div class="subtitle">${p.recommendations}</div>`).join('')}`;
        const cells = result.heatmapData
          .map((c) => `<tr><td><span class="swatch" style="background:${c.color}"></span>${c.country}</td><td>${c.region}</td><td>${c.emissions}</td><td>${c.riskLevel}</td></tr>`)
          .join('');
        document.getElementById('sector-heatmap').innerHTML = `
          <h2>Global Emissions Heatmap</h2>
          <table><tr><th>Country</th><th>Region</th><th>Mt CO₂</th><th>Risk</th></tr>${cells}</table>`;
      } catch (err) {
        alert(err.message);
      }
    });
"#;
