use crate::domain::skin::regions::VARIANT_COUNT;

const SUMMON_PREFIX: &str = "/summon block_display ~-0.5 ~-0.5 ~-0.5 {Passengers:[";
const SUMMON_SUFFIX: &str = "]}";

const SLOT_TRANSLATIONS: [[f32; 3]; VARIANT_COUNT * 2] = [
    [0.75, 1.0, 0.25],
    [0.25, 0.5, 0.75],
    [0.25, 1.0, 0.25],
    [0.75, 0.5, 0.75],
    [0.75, 0.5, 0.25],
    [0.25, 1.0, 0.75],
    [0.25, 0.5, 0.25],
    [0.75, 1.0, 0.75],
];

pub fn image_for_slot(slot: usize) -> usize {
    slot / 2
}

fn transformation([x, y, z]: [f32; 3]) -> String {
    [
        1.0, 0.0, 0.0, x, //
        0.0, 1.0, 0.0, y, //
        0.0, 0.0, 1.0, z, //
        0.0, 0.0, 0.0, 1.0,
    ]
    .iter()
    .map(|value| format!("{value:.4}f"))
    .collect::<Vec<_>>()
    .join(",")
}

fn head_passenger(texture_value: &str, translation: [f32; 3]) -> String {
    format!(
        "{{id:\"minecraft:item_display\",item:{{id:\"minecraft:player_head\",Count:1,components:{{\"minecraft:profile\":{{id:[],properties:[{{name:\"textures\",value:\"{texture_value}\"}}]}}}}}},item_display:\"none\",transformation:[{}]}}",
        transformation(translation)
    )
}

pub fn build_summon_command(texture_values: &[&str; VARIANT_COUNT]) -> String {
    let passengers = SLOT_TRANSLATIONS
        .iter()
        .enumerate()
        .map(|(slot, translation)| head_passenger(texture_values[image_for_slot(slot)], *translation))
        .collect::<Vec<_>>()
        .join(",");

    format!("{SUMMON_PREFIX}{passengers}{SUMMON_SUFFIX}")
}

#[cfg(test)]
mod tests {
    use super::{build_summon_command, image_for_slot};

    const VALUES: [&str; 4] = ["tex-A", "tex-B", "tex-C", "tex-D"];

    #[test]
    fn slots_map_two_per_image_in_order() {
        let images: Vec<usize> = (0..8).map(image_for_slot).collect();
        assert_eq!(images, vec![0, 0, 1, 1, 2, 2, 3, 3]);
    }

    #[test]
    fn command_embeds_each_texture_value_twice_in_slot_order() {
        let command = build_summon_command(&VALUES);

        for value in VALUES {
            assert_eq!(command.matches(&format!("value:\"{value}\"")).count(), 2);
        }

        let positions: Vec<usize> = VALUES
            .iter()
            .map(|value| command.find(&format!("value:\"{value}\"")).unwrap())
            .collect();
        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
        assert_eq!(command.matches("minecraft:item_display").count(), 8);
    }

    #[test]
    fn first_passenger_matches_game_syntax() {
        let command = build_summon_command(&VALUES);

        let expected_start = concat!(
            "/summon block_display ~-0.5 ~-0.5 ~-0.5 {Passengers:[",
            "{id:\"minecraft:item_display\",item:{id:\"minecraft:player_head\",Count:1,",
            "components:{\"minecraft:profile\":{id:[],properties:[{name:\"textures\",value:\"tex-A\"}]}}},",
            "item_display:\"none\",transformation:[1.0000f,0.0000f,0.0000f,0.7500f,0.0000f,1.0000f,",
            "0.0000f,1.0000f,0.0000f,0.0000f,1.0000f,0.2500f,0.0000f,0.0000f,0.0000f,1.0000f]},",
        );
        assert!(command.starts_with(expected_start), "{command}");
        assert!(command.ends_with("0.0000f,0.0000f,0.0000f,1.0000f]}]}"));
    }

    #[test]
    fn last_slot_uses_fourth_value_with_far_corner_translation() {
        let command = build_summon_command(&VALUES);
        let last = command.rsplit("{id:\"minecraft:item_display\"").next().unwrap();

        assert!(last.contains("value:\"tex-D\""));
        assert!(last.contains("0.7500f,0.0000f,1.0000f,0.0000f,1.0000f,0.0000f,0.0000f,1.0000f,0.7500f"));
    }
}
