use crate::utils::escape_html;

const STYLES: &str = r#"
body {
  margin: 0;
  min-height: 100vh;
  font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif;
  background: linear-gradient(135deg, #f5f7fa 0%, #c3cfe2 100%);
}
main { max-width: 1100px; margin: 0 auto; padding: 0 20px 40px; }
h1.title {
  background: linear-gradient(45deg, #ff6b6b, #4ecdc4, #45aaf2);
  background-size: 200% auto;
  color: #000;
  -webkit-background-clip: text;
  background-clip: text;
  -webkit-text-fill-color: transparent;
  animation: shine 3s linear infinite;
  text-align: center;
  padding: 20px;
  font-size: 3rem;
}
@keyframes shine { to { background-position: 200% center; } }
form.search { display: flex; gap: 10px; margin-bottom: 20px; }
form.search input[type=text] { flex: 1; padding: 10px; border-radius: 10px; border: 1px solid #c3cfe2; font-size: 1rem; }
form.search button { padding: 10px 20px; border-radius: 10px; border: 0; background: #667eea; color: white; cursor: pointer; }
.condition-card { padding: 20px; border-radius: 15px; margin-bottom: 20px; }
.metric-card {
  background: linear-gradient(135deg, #667eea 0%, #764ba2 100%);
  border-radius: 15px;
  padding: 20px;
  margin-bottom: 20px;
  color: white;
  box-shadow: 0 15px 30px rgba(0,0,0,0.2);
  transition: all 0.3s ease;
}
.metric-card:hover { transform: translateY(-10px); box-shadow: 0 20px 40px rgba(0,0,0,0.3); }
.metric-card .card-row { display: flex; justify-content: space-between; align-items: center; margin-top: 15px; }
.metric-card .subtle { color: #e0e0e0; }
.metric-card .warning { color: #ffb3b3; font-weight: bold; }
.weather-icon { filter: drop-shadow(0 0 10px rgba(0,0,0,0.3)); }
.map { height: 500px; border-radius: 15px; margin-bottom: 20px; }
.error { background: #fdecea; color: #b71c1c; padding: 15px 20px; border-radius: 10px; margin-bottom: 20px; }
.hint { text-align: center; color: #555; }
.tabs { display: flex; flex-wrap: wrap; }
.tabs > input { display: none; }
.tabs > label { padding: 10px 18px; border-radius: 10px; cursor: pointer; transition: all 0.3s ease; }
.tabs > label:hover { transform: scale(1.05); background-color: rgba(255,255,255,0.2); }
.tabs > input:checked + label { background: rgba(255,255,255,0.6); font-weight: bold; }
.tab-panel { display: none; width: 100%; background: white; border-radius: 15px; padding: 15px; margin-top: 10px; }
#tab-0:checked ~ #panel-0, #tab-1:checked ~ #panel-1, #tab-2:checked ~ #panel-2, #tab-3:checked ~ #panel-3 { display: block; }
table.insights { width: 100%; border-collapse: collapse; }
table.insights th, table.insights td { padding: 8px; border-bottom: 1px solid #eee; text-align: left; }
"#;

const HEAD_SCRIPTS: &str = r#"<link rel="stylesheet" href="https://unpkg.com/leaflet@1.9.4/dist/leaflet.css">
<script src="https://unpkg.com/leaflet@1.9.4/dist/leaflet.js"></script>
<script src="https://cdn.plot.ly/plotly-2.35.2.min.js"></script>"#;

/// Wraps `body` into the full document, with the search form pre-filled with
/// `query`.
pub fn page(query: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>WeatherPro Enhanced</title>
{scripts}
<style>{styles}</style>
</head>
<body>
<main>
<h1 class="title">🌈 WeatherPro: Advanced Forecast Explorer</h1>
<form class="search" method="get" action="/">
  <input type="text" name="city" value="{query}" placeholder="Enter City Name" title="Explore weather insights for any city">
  <button type="submit">Search</button>
</form>
{body}
</main>
</body>
</html>
"#,
        scripts = HEAD_SCRIPTS,
        styles = STYLES,
        query = escape_html(query),
        body = body,
    )
}
