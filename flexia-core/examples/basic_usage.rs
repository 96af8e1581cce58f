//! Example of the flexia-core helpers

use flexia_core::{
    camelize, pluralize, render_price_long, render_price_short, set_default_language, singularize,
    slug, transliterate, Direction, PriceFormatter,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Example 1: Transliteration and slugs
    println!("=== Example 1: Transliteration ===");
    let text = "Съешь же ещё этих мягких французских булок";
    println!("Input text: {}", text);
    println!("Latin:      {}", transliterate(text, Direction::ToLatin));
    println!("Slug:       {}", slug(text));
    println!("Camelized:  {}", camelize("user_profile-page"));

    // Example 2: English inflection
    println!("\n=== Example 2: English Inflection ===");
    for word in ["person", "knife", "matrix", "sheep"] {
        let plural = pluralize(word);
        println!("  {} -> {} -> {}", word, plural, singularize(&plural));
    }

    // Example 3: Amounts with the thread default language
    println!("\n=== Example 3: Amounts in Words ===");
    println!("{}", render_price_long("123000,55", true, "uah", None)?);
    set_default_language("ua");
    println!("{}", render_price_long("1000000,12", true, "uah", None)?);
    println!("{}", render_price_short(301.21, true, "грн.", None)?);

    // Example 4: A formatter with its own default language
    println!("\n=== Example 4: PriceFormatter ===");
    let formatter = PriceFormatter::builder().language("ru").build()?;
    println!("{}", formatter.render_long(2001u32, false, "rur", None)?);

    Ok(())
}
