//! Static ASCII-art glyphs for weather conditions.
//!
//! Every lookup is pure and total: unknown categories and icon codes fall
//! back to [`DEFAULT`], never to an error.

use crate::model::Condition;

pub const THUNDERSTORM: &str = r#"                    #####
               ....=########
             .......:########
            ............-######
          ...............*######
         ...................*##
          .....:+=...........
           ...:==+-........
               ==
              =="#;

pub const DRIZZLE: &str = r#"                  #####
             ......*######
             .........+#####
          .............:*###
          ...............
            ...#........
              #### #
                # ##"#;

pub const RAIN: &str = r#"                 . =======
              .....:+======
             ..........+===
           .............:++
           ...............
            ...++........
               # ## #
                ## #"#;

pub const SNOW: &str = r#"        ...        *                        *       *
          ...   *         * ..   ...                        *
 *          ...        *           *            *
              ...               ...                          *
                ..                            *
        *        ..        *                       *
               __##____              *                      *
  *        *  /  ##  ****                   *
             /        ****               *         *  X   *
   *        /        ******     *                    XXX      *
           /___________*****          *             XXXXX
            |            ***               *       XXXXXXX   X
        *   | ___        |                    *   XXXXXXXX  XXX
  *         | | |   ___  | *       *             XXXXXXXXXXXXXXX
            | |_|   | |  ****             *           X   XXXXXXX
        *********** | | *******      *                X      X
****    ********************************************************"#;

pub const ATMOSPHERE: &str = r#"               ######
            ##########
               #############
          #############
             #############
               ########"#;

pub const CLEAR_DAY: &str = r#"               ========
             ============
            ==============
            ===============
            ===============
            ==============
             ============+
               ========+"#;

pub const CLEAR_NIGHT: &str = r#"               ########
             ############
            ##############
            ###############
            ###############
            ##############
             #############
               #########"#;

pub const FEW_CLOUDS_DAY: &str = r#"                      ==+
               ....+========
             .......=========
             ...........=====
          ..............-+===
         ..................-
         ...................
           ................"#;

pub const FEW_CLOUDS_NIGHT: &str = r#"                    ###
               ....#########
             .......#########
             ..........:#####
          ..............+####
         ..................=
         ...................
           ................"#;

pub const SCATTERED_CLOUDS: &str = r#"               .....
              ........
            .............
          ..................
          ..................
           ................."#;

pub const OVERCAST_CLOUDS: &str = r#"                    ##
               .. ######
             ......+#######
            ..........:######
         ..............-######
         .................*##
         ..................
          ................"#;

/// Glyph served for any category or icon outside the known set.
pub const DEFAULT: &str = FEW_CLOUDS_DAY;

/// Select the glyph for a condition and provider icon code.
///
/// The icon only matters for `Clear` (day vs night) and `Clouds` (density
/// sub-variants). `03d` and `04d` have no distinct day glyph and share the
/// scattered-clouds block with every other unmatched variant.
pub fn glyph(condition: Condition, icon: &str) -> &'static str {
    match condition {
        Condition::Thunderstorm => THUNDERSTORM,
        Condition::Drizzle => DRIZZLE,
        Condition::Rain => RAIN,
        Condition::Snow => SNOW,
        Condition::Atmosphere => ATMOSPHERE,
        Condition::Clear => {
            if icon == "01d" {
                CLEAR_DAY
            } else {
                CLEAR_NIGHT
            }
        }
        Condition::Clouds => match icon {
            "02d" => FEW_CLOUDS_DAY,
            "02n" => FEW_CLOUDS_NIGHT,
            "03n" => SCATTERED_CLOUDS,
            "04n" => OVERCAST_CLOUDS,
            _ => SCATTERED_CLOUDS,
        },
        Condition::Unknown => DEFAULT,
    }
}

/// Labelled catalog entries, used by the `--glyphs` preview.
pub fn catalog() -> Vec<(&'static str, &'static str)> {
    vec![
        ("Thunderstorm", THUNDERSTORM),
        ("Drizzle", DRIZZLE),
        ("Rain", RAIN),
        ("Snow", SNOW),
        ("Atmosphere", ATMOSPHERE),
        ("Clear Day", CLEAR_DAY),
        ("Clear Night", CLEAR_NIGHT),
        ("Few Clouds Day", FEW_CLOUDS_DAY),
        ("Few Clouds Night", FEW_CLOUDS_NIGHT),
        ("Scattered Clouds", SCATTERED_CLOUDS),
        ("Overcast Clouds", OVERCAST_CLOUDS),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_known_category_has_a_glyph() {
        for cond in Condition::known() {
            let art = glyph(*cond, "01d");
            assert!(!art.is_empty(), "empty glyph for {cond}");
        }
    }

    #[test]
    fn clear_splits_on_day_icon() {
        assert_eq!(glyph(Condition::Clear, "01d"), CLEAR_DAY);
        assert_eq!(glyph(Condition::Clear, "01n"), CLEAR_NIGHT);
        // Anything that is not exactly "01d" is treated as night.
        assert_eq!(glyph(Condition::Clear, ""), CLEAR_NIGHT);
    }

    #[test]
    fn clouds_icon_variants() {
        assert_eq!(glyph(Condition::Clouds, "02d"), FEW_CLOUDS_DAY);
        assert_eq!(glyph(Condition::Clouds, "02n"), FEW_CLOUDS_NIGHT);
        assert_eq!(glyph(Condition::Clouds, "03n"), SCATTERED_CLOUDS);
        assert_eq!(glyph(Condition::Clouds, "04n"), OVERCAST_CLOUDS);
        // 03d/04d have no day glyph of their own.
        assert_eq!(glyph(Condition::Clouds, "03d"), SCATTERED_CLOUDS);
        assert_eq!(glyph(Condition::Clouds, "04d"), SCATTERED_CLOUDS);
    }

    #[test]
    fn unknown_category_gets_the_default_glyph() {
        assert_eq!(glyph(Condition::Unknown, "01d"), DEFAULT);
        assert_eq!(
            glyph(Condition::from_provider("Tornado"), "11d"),
            DEFAULT
        );
    }

    #[test]
    fn lookups_are_deterministic() {
        for cond in Condition::known() {
            for icon in ["01d", "02n", "03d", "xx"] {
                assert_eq!(glyph(*cond, icon), glyph(*cond, icon));
            }
        }
    }
}
