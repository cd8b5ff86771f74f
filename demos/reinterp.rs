// demos/reinterp.rs
//! Zero-copy reinterpretation between text and bytes

use rawview::reinterp;
use rawview::Result;

fn main() -> Result<()> {
    println!("=== Text To Bytes ===\n");

    // Both views print the same address: the byte view aliases the text's
    // storage instead of copying it.
    let text = "neato burrito";
    let bytes = reinterp::text_as_bytes(text);

    println!("text:  {text:?} at {:p}", text.as_ptr());
    println!("bytes: {bytes:?} at {:p}", bytes.as_ptr());

    println!("\n=== Bytes To Text ===\n");

    let bytes = [
        115u8, 111, 32, 109, 97, 110, 121, 32, 110, 101, 97, 116, 32, 98, 121, 116, 101, 115,
    ];
    let text = reinterp::bytes_as_text(&bytes)?;

    println!("bytes: {bytes:?} at {:p}", bytes.as_ptr());
    println!("text:  {text:?} at {:p}", text.as_ptr());

    println!("\n=== Owned Conversions ===\n");

    // The allocation itself changes hands: text to buffer to text, one
    // address the whole way through.
    let owned = String::from("neato burrito");
    println!("text:   {owned:?} at {:p}", owned.as_ptr());

    let buffer = reinterp::text_into_bytes(owned);
    println!("buffer: {buffer:?} at {:p}", buffer.as_ptr());

    let owned = reinterp::bytes_into_text(buffer)?;
    println!("text:   {owned:?} at {:p}", owned.as_ptr());

    Ok(())
}
