//! Prints every operation of the library applied to a few sample inputs.
//!
//! Set `RUST_LOG=debug` to see the generator logs.

use runecomb::prelude::*;

fn main() -> Result<(), RuneError> {
    env_logger::init();

    for text in ["abc", "猫咪", "Туч"] {
        println!("permutations({text}): {:?}", permutations(text));
        println!("pick({text}, 2):      {:?}", pick(text, 2));
        println!("combinations({text}, 2): {:?}", combinations(text, 2));
    }

    let runes = Runes::from("猫猫猫9ч");
    println!("remove_at({runes}, 3):  {}", runes.remove_at(3));
    println!("replace_at({runes}, 0): {}", runes.replace_at(0, 'ч'.into())?);

    let text = "aaabccd";
    println!("frequency({text}):         {:?}", frequency(text));
    println!("first_occurrences({text}): {}", first_occurrences(text));
    println!("exclusive({text}, ab):     {}", exclusive(text, &RuneSet::from("ab")));
    println!("collapse_adjacent({text}): {}", collapse_adjacent(text));
    println!("dedup: {:?}", dedup_canonical(["猫b", "b猫", "猫"]));

    Ok(())
}
