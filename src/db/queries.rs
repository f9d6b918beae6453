// Numeric columns are cast so decoding does not depend on whether the
// deployment stores them as smallint/numeric or wider types.

pub const SELECT_CARS: &str = r#"
SELECT id::int8 AS id, name, model, vin, trim_badging, exterior_color
FROM cars
ORDER BY id;
"#;

pub const SELECT_CAR: &str = r#"
SELECT id::int8 AS id, name, model, vin, trim_badging, exterior_color
FROM cars
WHERE id = $1;
"#;

pub const SELECT_LATEST_TWO_POSITIONS: &str = r#"
SELECT id::int8 AS id,
       car_id::int8 AS car_id,
       date,
       latitude::float8 AS latitude,
       longitude::float8 AS longitude,
       speed::int4 AS speed,
       battery_level::int4 AS battery_level
FROM positions
WHERE car_id = $1
ORDER BY date DESC, id DESC
LIMIT 2;
"#;

pub const PING: &str = "SELECT 1;";
