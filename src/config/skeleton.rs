/// Default `settings.conf` written on first run.
pub const SETTINGS_SKELETON_CONTENT: &str = "# tirecat settings configuration\n\
# Storefront REST API base URL (tires and wheels are fetched from <base>/tires and <base>/wheels)\n\
api_base_url = http://localhost:5000/api\n\
\n\
# Catalog shown on startup\n\
# Allowed values: tires | wheels\n\
default_kind = tires\n\
\n\
# Results sorting\n\
# Allowed values: featured | price-low | price-high | newest\n\
sort_mode = featured\n\
\n\
# Results layout\n\
# Allowed values: list | grid\n\
view_mode = list\n\
\n\
# Seconds before a catalog request is abandoned\n\
request_timeout_secs = 10\n\
\n\
# Minutes a downloaded catalog stays valid on disk (0 disables the disk cache)\n\
catalog_cache_ttl_minutes = 30\n\
\n\
# Narrow listings to saved vehicles (manage them with --add-vehicle / --list-vehicles)\n\
apply_saved_vehicles = true\n\
\n\
# Symbol printed in front of prices\n\
currency_symbol = $\n";
