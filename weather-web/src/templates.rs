//! Embedded Tera templates for the dashboard page.

use tera::{Context, Tera};

use crate::{error::WebError, view::PageView};

pub const DASHBOARD_TEMPLATE: &str = "dashboard.html";

const DASHBOARD_HTML: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>Live Weather Dashboard</title>
<style>
  body { margin: 0; font-family: Arial, sans-serif; color: #333; background-size: cover;
         background-position: center; background-repeat: no-repeat; background-attachment: fixed; }
  main { max-width: 1200px; margin: 0 auto; padding: 0 1rem 2rem; }
  .header { background: linear-gradient(135deg, rgba(0,0,0,0.7), rgba(0,0,0,0.4)); padding: 10px;
            border-radius: 12px; margin: 0.5rem 0; border-bottom: 3px solid rgba(255,255,255,0.3); }
  .main-header { color: white; font-size: 4rem; text-align: center; margin: 0.5rem 0; font-weight: 900;
                 text-shadow: 2px 2px 6px rgba(0,0,0,0.8); }
  .search-bar { display: flex; gap: 1rem; margin-bottom: 1rem; }
  .search-bar input { flex: 4; padding: 0.6rem; font-size: 1.1rem; border-radius: 6px; border: 1px solid #ccc; }
  .search-bar button { flex: 1; padding: 0.6rem; font-size: 1.1rem; border-radius: 6px; border: none;
                       background: #1E88E5; color: white; cursor: pointer; }
  .section-heading { font-size: 1.8rem; background: linear-gradient(135deg, rgba(255,255,255,0.5), rgba(255,255,255,0.3));
                     padding: 10px 15px; border-radius: 8px; display: inline-block; margin-bottom: 15px;
                     border-left: 4px solid #1E4B88; color: #1E4B88; }
  .date-display, .weather-info-text, .weather-status { background-color: rgba(255,255,255,0.5);
                     padding: 8px 12px; border-radius: 5px; color: #1E4B88; display: inline-block; }
  .weather-status { font-size: 1.5rem; font-weight: bold; }
  .current { display: flex; align-items: center; gap: 1rem; margin: 1rem 0; }
  .tiles { display: grid; grid-template-columns: repeat(auto-fit, minmax(160px, 1fr)); gap: 1rem; margin: 1rem 0; }
  .tile { background-color: rgba(255,255,255,0.6); padding: 10px; border-radius: 5px;
          box-shadow: 0 2px 5px rgba(0,0,0,0.1); }
  .tile .value { font-size: 1.6rem; font-weight: bold; color: #1E4B88; }
  .tile .label { font-size: 1rem; font-weight: 600; }
  .chart { background: rgba(255,255,255,0.5); border-radius: 8px; padding: 10px; }
  .chart svg { width: 100%; height: auto; }
  .cards { display: grid; grid-template-columns: repeat(5, 1fr); gap: 1rem; }
  .forecast-card { text-align: center; padding: 15px; border-radius: 10px; color: white;
                   box-shadow: 0 4px 6px rgba(0,0,0,0.1); transition: transform 0.3s;
                   text-shadow: 1px 1px 2px rgba(0,0,0,0.5); }
  .forecast-card:hover { transform: scale(1.05); }
  .error { background-color: rgba(255,255,255,0.7); color: #D32F2F; padding: 1rem; border-radius: 5px;
           font-size: 1.1rem; font-weight: 500; }
</style>
</head>
<body style="background-image: url('{{ background_url }}');">
<main>
  <div class="header"><h1 class="main-header">🌦️ Live Weather Dashboard</h1></div>

  <form class="search-bar" method="get" action="/">
    <input type="text" name="city" placeholder="Enter city name..." value="{{ query }}" aria-label="City">
    <button type="submit">Get Weather</button>
  </form>

{% if error %}
  <div class="error" role="alert">{{ error }}</div>
{% elif dashboard %}
  {% set d = dashboard %}
  <section id="current">
    <h3 class="section-heading">Current Weather in {{ d.city }}</h3>
    <div><span class="date-display"><strong>Last Updated</strong>: {{ d.last_updated }}</span></div>
    <div class="current">
      <img src="{{ d.icon_url }}" width="120" alt="{{ d.description }}">
      <div>
        <div class="weather-status">{{ d.condition }}: {{ d.description }}</div>
        <div class="weather-info-text">Current conditions in {{ d.city }} show <strong>{{ d.description }}</strong>. The dashboard background reflects these conditions.</div>
      </div>
    </div>
  </section>

  <section id="metrics" class="tiles">
  {% for tile in d.primary %}
    <div class="tile metric-card"><div class="value">{{ tile.value }}</div><div class="label">{{ tile.label }}</div></div>
  {% endfor %}
  </section>
  <hr>
  <section id="details" class="tiles">
  {% for tile in d.secondary %}
    <div class="tile"><div class="label">{{ tile.label }}</div><div class="value">{{ tile.value }}</div></div>
  {% endfor %}
  </section>
  <hr>

  <section id="hourly">
    <h3 class="section-heading">24-Hour Temperature Forecast</h3>
    <div class="chart">{{ d.chart_svg | safe }}</div>
  </section>

  <section id="daily">
    <h3 class="section-heading">5-Day Forecast</h3>
    <div class="cards">
    {% for day in d.days %}
      <div class="forecast-card" style="background-color: {{ day.color }};">
        <h4>{{ day.day }}</h4>
        <p>{{ day.date }}</p>
        <img src="{{ day.icon_url }}" width="70" alt="{{ day.description }}">
        <h3>{{ day.temperature }}</h3>
        <p>{{ day.description }}</p>
      </div>
    {% endfor %}
    </div>
  </section>
{% endif %}
</main>
</body>
</html>
"##;

/// Compile the embedded templates. HTML-escaping is on for `.html` names.
pub fn build_templates() -> Result<Tera, WebError> {
    let mut tera = Tera::default();
    tera.autoescape_on(vec![".html"]);
    tera.add_raw_template(DASHBOARD_TEMPLATE, DASHBOARD_HTML)?;
    Ok(tera)
}

pub fn render_page(tera: &Tera, page: &PageView) -> Result<String, WebError> {
    let context = Context::from_serialize(page)?;
    Ok(tera.render(DASHBOARD_TEMPLATE, &context)?)
}
