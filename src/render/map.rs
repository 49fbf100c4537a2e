use crate::types::lat_lon::LatLon;
use crate::utils::{capitalize, escape_html};

const ZOOM: u8 = 10;

/// A Leaflet map on OpenStreetMap tiles, centered on `location` with a
/// marker labelled with the capitalized `city`.
///
/// The page must load Leaflet; see [`crate::render::page`].
pub fn location_map(city: &str, location: LatLon) -> String {
    // The popup is injected as HTML by Leaflet, so it is escaped here and
    // then JSON-quoted for the script context.
    let popup = escape_html(&capitalize(city)).into_owned();
    let popup = serde_json::Value::String(popup).to_string().replace("</", "<\\/");
    format!(
        r#"<div id="location-map" class="map"></div>
<script>
  (function () {{
    var center = [{lat}, {lon}];
    var map = L.map('location-map').setView(center, {zoom});
    L.tileLayer('https://{{s}}.tile.openstreetmap.org/{{z}}/{{x}}/{{y}}.png', {{
      maxZoom: 19,
      attribution: '&copy; OpenStreetMap contributors'
    }}).addTo(map);
    L.marker(center).addTo(map).bindPopup({popup});
  }})();
</script>"#,
        lat = location.latitude(),
        lon = location.longitude(),
        zoom = ZOOM,
        popup = popup,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_is_centered_on_location() {
        let html = location_map("london", LatLon(51.5085, -0.1257));
        assert!(html.contains("var center = [51.5085, -0.1257];"));
        assert!(html.contains("setView(center, 10)"));
        assert!(html.contains(r#"bindPopup("London")"#));
        assert!(html.contains("tile.openstreetmap.org/{z}/{x}/{y}.png"));
    }

    #[test]
    fn test_popup_cannot_break_out_of_script() {
        let html = location_map("</script><script>alert(1)", LatLon(0.0, 0.0));
        assert_eq!(html.matches("</script>").count(), 1);
    }
}
