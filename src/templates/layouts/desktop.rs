use maud::{html, Markup, DOCTYPE, PreEscaped};

const LEAFLET_CSS: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.css";
const LEAFLET_JS: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.js";
const CLUSTER_CSS: &str =
    "https://unpkg.com/leaflet.markercluster@1.5.3/dist/MarkerCluster.css";
const CLUSTER_DEFAULT_CSS: &str =
    "https://unpkg.com/leaflet.markercluster@1.5.3/dist/MarkerCluster.Default.css";
const CLUSTER_JS: &str =
    "https://unpkg.com/leaflet.markercluster@1.5.3/dist/leaflet.markercluster.js";

const PAGE_CSS: &str = "
body { margin: 0; font-family: sans-serif; }
header { display: flex; align-items: center; gap: 0.5rem; padding: 0.6rem 1.2rem;
         box-shadow: 0 1px 4px rgba(0,0,0,0.15); }
header h3 { margin: 0; }
.caption { color: #555; font-size: 0.9rem; padding: 0.4rem 1.2rem; }
.layout { display: flex; gap: 1rem; padding: 1rem 1.2rem; align-items: flex-start; }
.sidebar { flex: 0 0 240px; }
.sidebar label { display: block; margin-top: 0.7rem; font-size: 0.85rem; }
.sidebar select, .sidebar input { width: 100%; box-sizing: border-box; }
.sidebar button { margin-top: 1rem; width: 100%; }
.content { flex: 3; }
.summary { flex: 1; }
#map { height: 600px; border: 1px solid #ccc; }
.warning { background: #fff3cd; border: 1px solid #ffe69c; padding: 0.5rem 0.8rem;
           margin-bottom: 0.6rem; font-size: 0.85rem; }
details { margin: 0 1.2rem 1.5rem; }
table { border-collapse: collapse; font-size: 0.85rem; }
th, td { border: 1px solid #ddd; padding: 0.25rem 0.5rem; }
";

pub fn desktop_layout(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="ko" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                link rel="stylesheet" href=(LEAFLET_CSS);
                link rel="stylesheet" href=(CLUSTER_CSS);
                link rel="stylesheet" href=(CLUSTER_DEFAULT_CSS);
                script src=(LEAFLET_JS) {}
                script src=(CLUSTER_JS) {}
                style { (PreEscaped(PAGE_CSS)) }
            }
            body {
                header {
                    h3 { "🏠 서울에서 내 집 마련하기" }
                }
                p class="caption" {
                    "원하는 조건을 입력하세요. 예산·연식·면적·최소 층수·구를 선택하면 표와 지도에 바로 반영됩니다."
                }
                (content)
            }
        }
    }
}
