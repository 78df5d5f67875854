// Written by palette-brewery-tools

pub(crate) mod ty;
use ty::*;

// xkcd color survey — https://xkcd.com/color/rgb/
// Number of colors: 949
pub(crate) static XKCD: [(&str, [u8; 3]); 949] = [
    ("cloudy blue", [0xac, 0xc2, 0xd9]),
    ("dark pastel green", [0x56, 0xae, 0x57]),
    ("dust", [0xb2, 0x99, 0x6e]),
    ("electric lime", [0xa8, 0xff, 0x04]),
    ("fresh green", [0x69, 0xd8, 0x4f]),
    ("light eggplant", [0x89, 0x45, 0x85]),
    ("nasty green", [0x70, 0xb2, 0x3f]),
    ("really light blue", [0xd4, 0xff, 0xff]),
    ("tea", [0x65, 0xab, 0x7c]),
    ("warm purple", [0x95, 0x2e, 0x8f]),
    ("yellowish tan", [0xfc, 0xfc, 0x81]),
    ("cement", [0xa5, 0xa3, 0x91]),
    ("dark grass green", [0x38, 0x80, 0x04]),
    ("dusty teal", [0x4c, 0x90, 0x85]),
    ("grey teal", [0x5e, 0x9b, 0x8a]),
    ("macaroni and cheese", [0xef, 0xb4, 0x35]),
    ("pinkish tan", [0xd9, 0x9b, 0x82]),
    ("spruce", [0x0a, 0x5f, 0x38]),
    ("strong blue", [0x0c, 0x06, 0xf7]),
    ("toxic green", [0x61, 0xde, 0x2a]),
    ("windows blue", [0x37, 0x78, 0xbf]),
    ("blue blue", [0x22, 0x42, 0xc7]),
    ("blue with a hint of purple", [0x53, 0x3c, 0xc6]),
    ("booger", [0x9b, 0xb5, 0x3c]),
    ("bright sea green", [0x05, 0xff, 0xa6]),
    ("dark green blue", [0x1f, 0x63, 0x57]),
    ("deep turquoise", [0x01, 0x73, 0x74]),
    ("green teal", [0x0c, 0xb5, 0x77]),
    ("strong pink", [0xff, 0x07, 0x89]),
    ("bland", [0xaf, 0xa8, 0x8b]),
    ("deep aqua", [0x08, 0x78, 0x7f]),
    ("lavender pink", [0xdd, 0x85, 0xd7]),
    ("light moss green", [0xa6, 0xc8, 0x75]),
    ("light seafoam green", [0xa7, 0xff, 0xb5]),
    ("olive yellow", [0xc2, 0xb7, 0x09]),
    ("pig pink", [0xe7, 0x8e, 0xa5]),
    ("deep lilac", [0x96, 0x6e, 0xbd]),
    ("desert", [0xcc, 0xad, 0x60]),
    ("dusty lavender", [0xac, 0x86, 0xa8]),
    ("purpley grey", [0x94, 0x7e, 0x94]),
    ("purply", [0x98, 0x3f, 0xb2]),
    ("candy pink", [0xff, 0x63, 0xe9]),
    ("light pastel green", [0xb2, 0xfb, 0xa5]),
    ("boring green", [0x63, 0xb3, 0x65]),
    ("kiwi green", [0x8e, 0xe5, 0x3f]),
    ("light grey green", [0xb7, 0xe1, 0xa1]),
    ("orange pink", [0xff, 0x6f, 0x52]),
    ("tea green", [0xbd, 0xf8, 0xa3]),
    ("very light brown", [0xd3, 0xb6, 0x83]),
    ("egg shell", [0xff, 0xfc, 0xc4]),
    ("eggplant purple", [0x43, 0x05, 0x41]),
    ("powder pink", [0xff, 0xb2, 0xd0]),
    ("reddish grey", [0x99, 0x75, 0x70]),
    ("baby shit brown", [0xad, 0x90, 0x0d]),
    ("liliac", [0xc4, 0x8e, 0xfd]),
    ("stormy blue", [0x50, 0x7b, 0x9c]),
    ("ugly brown", [0x7d, 0x71, 0x03]),
    ("custard", [0xff, 0xfd, 0x78]),
    ("darkish pink", [0xda, 0x46, 0x7d]),
    ("deep brown", [0x41, 0x02, 0x00]),
    ("greenish beige", [0xc9, 0xd1, 0x79]),
    ("manilla", [0xff, 0xfa, 0x86]),
    ("off blue", [0x56, 0x84, 0xae]),
    ("battleship grey", [0x6b, 0x7c, 0x85]),
    ("browny green", [0x6f, 0x6c, 0x0a]),
    ("bruise", [0x7e, 0x40, 0x71]),
    ("kelley green", [0x00, 0x93, 0x37]),
    ("sickly yellow", [0xd0, 0xe4, 0x29]),
    ("sunny yellow", [0xff, 0xf9, 0x17]),
    ("azul", [0x1d, 0x5d, 0xec]),
    ("darkgreen", [0x05, 0x49, 0x07]),
    ("green/yellow", [0xb5, 0xce, 0x08]),
    ("lichen", [0x8f, 0xb6, 0x7b]),
    ("light light green", [0xc8, 0xff, 0xb0]),
    ("pale gold", [0xfd, 0xde, 0x6c]),
    ("sun yellow", [0xff, 0xdf, 0x22]),
    ("tan green", [0xa9, 0xbe, 0x70]),
    ("burple", [0x68, 0x32, 0xe3]),
    ("butterscotch", [0xfd, 0xb1, 0x47]),
    ("toupe", [0xc7, 0xac, 0x7d]),
    ("dark cream", [0xff, 0xf3, 0x9a]),
    ("indian red", [0x85, 0x0e, 0x04]),
    ("light lavendar", [0xef, 0xc0, 0xfe]),
    ("poison green", [0x40, 0xfd, 0x14]),
    ("baby puke green", [0xb6, 0xc4, 0x06]),
    ("bright yellow green", [0x9d, 0xff, 0x00]),
    ("charcoal grey", [0x3c, 0x41, 0x42]),
    ("squash", [0xf2, 0xab, 0x15]),
    ("cinnamon", [0xac, 0x4f, 0x06]),
    ("light pea green", [0xc4, 0xfe, 0x82]),
    ("radioactive green", [0x2c, 0xfa, 0x1f]),
    ("raw sienna", [0x9a, 0x62, 0x00]),
    ("baby purple", [0xca, 0x9b, 0xf7]),
    ("cocoa", [0x87, 0x5f, 0x42]),
    ("light royal blue", [0x3a, 0x2e, 0xfe]),
    ("orangeish", [0xfd, 0x8d, 0x49]),
    ("rust brown", [0x8b, 0x31, 0x03]),
    ("sand brown", [0xcb, 0xa5, 0x60]),
    ("swamp", [0x69, 0x83, 0x39]),
    ("tealish green", [0x0c, 0xdc, 0x73]),
    ("burnt siena", [0xb7, 0x52, 0x03]),
    ("camo", [0x7f, 0x8f, 0x4e]),
    ("dusk blue", [0x26, 0x53, 0x8d]),
    ("fern", [0x63, 0xa9, 0x50]),
    ("old rose", [0xc8, 0x7f, 0x89]),
    ("pale light green", [0xb1, 0xfc, 0x99]),
    ("peachy pink", [0xff, 0x9a, 0x8a]),
    ("rosy pink", [0xf6, 0x68, 0x8e]),
    ("light bluish green", [0x76, 0xfd, 0xa8]),
    ("light bright green", [0x53, 0xfe, 0x5c]),
    ("light neon green", [0x4e, 0xfd, 0x54]),
    ("light seafoam", [0xa0, 0xfe, 0xbf]),
    ("tiffany blue", [0x7b, 0xf2, 0xda]),
    ("washed out green", [0xbc, 0xf5, 0xa6]),
    ("browny orange", [0xca, 0x6b, 0x02]),
    ("nice blue", [0x10, 0x7a, 0xb0]),
    ("sapphire", [0x21, 0x38, 0xab]),
    ("greyish teal", [0x71, 0x9f, 0x91]),
    ("orangey yellow", [0xfd, 0xb9, 0x15]),
    ("parchment", [0xfe, 0xfc, 0xaf]),
    ("straw", [0xfc, 0xf6, 0x79]),
    ("very dark brown", [0x1d, 0x02, 0x00]),
    ("terracota", [0xcb, 0x68, 0x43]),
    ("ugly blue", [0x31, 0x66, 0x8a]),
    ("clear blue", [0x24, 0x7a, 0xfd]),
    ("creme", [0xff, 0xff, 0xb6]),
    ("foam green", [0x90, 0xfd, 0xa9]),
    ("grey/green", [0x86, 0xa1, 0x7d]),
    ("light gold", [0xfd, 0xdc, 0x5c]),
    ("seafoam blue", [0x78, 0xd1, 0xb6]),
    ("topaz", [0x13, 0xbb, 0xaf]),
    ("violet pink", [0xfb, 0x5f, 0xfc]),
    ("wintergreen", [0x20, 0xf9, 0x86]),
    ("yellow tan", [0xff, 0xe3, 0x6e]),
    ("dark fuchsia", [0x9d, 0x07, 0x59]),
    ("indigo blue", [0x3a, 0x18, 0xb1]),
    ("light yellowish green", [0xc2, 0xff, 0x89]),
    ("pale magenta", [0xd7, 0x67, 0xad]),
    ("rich purple", [0x72, 0x00, 0x58]),
    ("sunflower yellow", [0xff, 0xda, 0x03]),
    ("green/blue", [0x01, 0xc0, 0x8d]),
    ("leather", [0xac, 0x74, 0x34]),
    ("racing green", [0x01, 0x46, 0x00]),
    ("vivid purple", [0x99, 0x00, 0xfa]),
    ("dark royal blue", [0x02, 0x06, 0x6f]),
    ("hazel", [0x8e, 0x76, 0x18]),
    ("muted pink", [0xd1, 0x76, 0x8f]),
    ("booger green", [0x96, 0xb4, 0x03]),
    ("canary", [0xfd, 0xff, 0x63]),
    ("cool grey", [0x95, 0xa3, 0xa6]),
    ("dark taupe", [0x7f, 0x68, 0x4e]),
    ("darkish purple", [0x75, 0x19, 0x73]),
    ("true green", [0x08, 0x94, 0x04]),
    ("coral pink", [0xff, 0x61, 0x63]),
    ("dark sage", [0x59, 0x85, 0x56]),
    ("dark slate blue", [0x21, 0x47, 0x61]),
    ("flat blue", [0x3c, 0x73, 0xa8]),
    ("mushroom", [0xba, 0x9e, 0x88]),
    ("rich blue", [0x02, 0x1b, 0xf9]),
    ("dirty purple", [0x73, 0x4a, 0x65]),
    ("greenblue", [0x23, 0xc4, 0x8b]),
    ("icky green", [0x8f, 0xae, 0x22]),
    ("light khaki", [0xe6, 0xf2, 0xa2]),
    ("warm blue", [0x4b, 0x57, 0xdb]),
    ("dark hot pink", [0xd9, 0x01, 0x66]),
    ("deep sea blue", [0x01, 0x54, 0x82]),
    ("carmine", [0x9d, 0x02, 0x16]),
    ("dark yellow green", [0x72, 0x8f, 0x02]),
    ("pale peach", [0xff, 0xe5, 0xad]),
    ("plum purple", [0x4e, 0x05, 0x50]),
    ("golden rod", [0xf9, 0xbc, 0x08]),
    ("neon red", [0xff, 0x07, 0x3a]),
    ("old pink", [0xc7, 0x79, 0x86]),
    ("very pale blue", [0xd6, 0xff, 0xfe]),
    ("blood orange", [0xfe, 0x4b, 0x03]),
    ("grapefruit", [0xfd, 0x59, 0x56]),
    ("sand yellow", [0xfc, 0xe1, 0x66]),
    ("clay brown", [0xb2, 0x71, 0x3d]),
    ("dark blue grey", [0x1f, 0x3b, 0x4d]),
    ("flat green", [0x69, 0x9d, 0x4c]),
    ("light green blue", [0x56, 0xfc, 0xa2]),
    ("warm pink", [0xfb, 0x55, 0x81]),
    ("dodger blue", [0x3e, 0x82, 0xfc]),
    ("gross green", [0xa0, 0xbf, 0x16]),
    ("ice", [0xd6, 0xff, 0xfa]),
    ("metallic blue", [0x4f, 0x73, 0x8e]),
    ("pale salmon", [0xff, 0xb1, 0x9a]),
    ("sap green", [0x5c, 0x8b, 0x15]),
    ("algae", [0x54, 0xac, 0x68]),
    ("bluey grey", [0x89, 0xa0, 0xb0]),
    ("greeny grey", [0x7e, 0xa0, 0x7a]),
    ("highlighter green", [0x1b, 0xfc, 0x06]),
    ("light light blue", [0xca, 0xff, 0xfb]),
    ("light mint", [0xb6, 0xff, 0xbb]),
    ("raw umber", [0xa7, 0x5e, 0x09]),
    ("vivid blue", [0x15, 0x2e, 0xff]),
    ("deep lavender", [0x8d, 0x5e, 0xb7]),
    ("dull teal", [0x5f, 0x9e, 0x8f]),
    ("light greenish blue", [0x63, 0xf7, 0xb4]),
    ("mud green", [0x60, 0x66, 0x02]),
    ("pinky", [0xfc, 0x86, 0xaa]),
    ("red wine", [0x8c, 0x00, 0x34]),
    ("shit green", [0x75, 0x80, 0x00]),
    ("tan brown", [0xab, 0x7e, 0x4c]),
    ("darkblue", [0x03, 0x07, 0x64]),
    ("rosa", [0xfe, 0x86, 0xa4]),
    ("lipstick", [0xd5, 0x17, 0x4e]),
    ("pale mauve", [0xfe, 0xd0, 0xfc]),
    ("claret", [0x68, 0x00, 0x18]),
    ("dandelion", [0xfe, 0xdf, 0x08]),
    ("orangered", [0xfe, 0x42, 0x0f]),
    ("poop green", [0x6f, 0x7c, 0x00]),
    ("ruby", [0xca, 0x01, 0x47]),
    ("dark", [0x1b, 0x24, 0x31]),
    ("greenish turquoise", [0x00, 0xfb, 0xb0]),
    ("pastel red", [0xdb, 0x58, 0x56]),
    ("piss yellow", [0xdd, 0xd6, 0x18]),
    ("bright cyan", [0x41, 0xfd, 0xfe]),
    ("dark coral", [0xcf, 0x52, 0x4e]),
    ("algae green", [0x21, 0xc3, 0x6f]),
    ("darkish red", [0xa9, 0x03, 0x08]),
    ("reddy brown", [0x6e, 0x10, 0x05]),
    ("blush pink", [0xfe, 0x82, 0x8c]),
    ("camouflage green", [0x4b, 0x61, 0x13]),
    ("lawn green", [0x4d, 0xa4, 0x09]),
    ("putty", [0xbe, 0xae, 0x8a]),
    ("vibrant blue", [0x03, 0x39, 0xf8]),
    ("dark sand", [0xa8, 0x8f, 0x59]),
    ("purple/blue", [0x5d, 0x21, 0xd0]),
    ("saffron", [0xfe, 0xb2, 0x09]),
    ("twilight", [0x4e, 0x51, 0x8b]),
    ("warm brown", [0x96, 0x4e, 0x02]),
    ("bluegrey", [0x85, 0xa3, 0xb2]),
    ("bubble gum pink", [0xff, 0x69, 0xaf]),
    ("duck egg blue", [0xc3, 0xfb, 0xf4]),
    ("greenish cyan", [0x2a, 0xfe, 0xb7]),
    ("petrol", [0x00, 0x5f, 0x6a]),
    ("royal", [0x0c, 0x17, 0x93]),
    ("butter", [0xff, 0xff, 0x81]),
    ("dusty orange", [0xf0, 0x83, 0x3a]),
    ("off yellow", [0xf1, 0xf3, 0x3f]),
    ("pale olive green", [0xb1, 0xd2, 0x7b]),
    ("orangish", [0xfc, 0x82, 0x4a]),
    ("leaf", [0x71, 0xaa, 0x34]),
    ("light blue grey", [0xb7, 0xc9, 0xe2]),
    ("dried blood", [0x4b, 0x01, 0x01]),
    ("lightish purple", [0xa5, 0x52, 0xe6]),
    ("rusty red", [0xaf, 0x2f, 0x0d]),
    ("lavender blue", [0x8b, 0x88, 0xf8]),
    ("light grass green", [0x9a, 0xf7, 0x64]),
    ("light mint green", [0xa6, 0xfb, 0xb2]),
    ("sunflower", [0xff, 0xc5, 0x12]),
    ("velvet", [0x75, 0x08, 0x51]),
    ("brick orange", [0xc1, 0x4a, 0x09]),
    ("lightish red", [0xfe, 0x2f, 0x4a]),
    ("pure blue", [0x02, 0x03, 0xe2]),
    ("twilight blue", [0x0a, 0x43, 0x7a]),
    ("violet red", [0xa5, 0x00, 0x55]),
    ("yellowy brown", [0xae, 0x8b, 0x0c]),
    ("carnation", [0xfd, 0x79, 0x8f]),
    ("muddy yellow", [0xbf, 0xac, 0x05]),
    ("dark seafoam green", [0x3e, 0xaf, 0x76]),
    ("deep rose", [0xc7, 0x47, 0x67]),
    ("dusty red", [0xb9, 0x48, 0x4e]),
    ("grey/blue", [0x64, 0x7d, 0x8e]),
    ("lemon lime", [0xbf, 0xfe, 0x28]),
    ("purple/pink", [0xd7, 0x25, 0xde]),
    ("brown yellow", [0xb2, 0x97, 0x05]),
    ("purple brown", [0x67, 0x3a, 0x3f]),
    ("wisteria", [0xa8, 0x7d, 0xc2]),
    ("banana yellow", [0xfa, 0xfe, 0x4b]),
    ("lipstick red", [0xc0, 0x02, 0x2f]),
    ("water blue", [0x0e, 0x87, 0xcc]),
    ("brown grey", [0x8d, 0x84, 0x68]),
    ("vibrant purple", [0xad, 0x03, 0xde]),
    ("baby green", [0x8c, 0xff, 0x9e]),
    ("barf green", [0x94, 0xac, 0x02]),
    ("eggshell blue", [0xc4, 0xff, 0xf7]),
    ("sandy yellow", [0xfd, 0xee, 0x73]),
    ("cool green", [0x33, 0xb8, 0x64]),
    ("pale", [0xff, 0xf9, 0xd0]),
    ("blue/grey", [0x75, 0x8d, 0xa3]),
    ("hot magenta", [0xf5, 0x04, 0xc9]),
    ("greyblue", [0x77, 0xa1, 0xb5]),
    ("purpley", [0x87, 0x56, 0xe4]),
    ("baby shit green", [0x88, 0x97, 0x17]),
    ("brownish pink", [0xc2, 0x7e, 0x79]),
    ("dark aquamarine", [0x01, 0x73, 0x71]),
    ("diarrhea", [0x9f, 0x83, 0x03]),
    ("light mustard", [0xf7, 0xd5, 0x60]),
    ("pale sky blue", [0xbd, 0xf6, 0xfe]),
    ("turtle green", [0x75, 0xb8, 0x4f]),
    ("bright olive", [0x9c, 0xbb, 0x04]),
    ("dark grey blue", [0x29, 0x46, 0x5b]),
    ("greeny brown", [0x69, 0x60, 0x06]),
    ("lemon green", [0xad, 0xf8, 0x02]),
    ("light periwinkle", [0xc1, 0xc6, 0xfc]),
    ("seaweed green", [0x35, 0xad, 0x6b]),
    ("sunshine yellow", [0xff, 0xfd, 0x37]),
    ("ugly purple", [0xa4, 0x42, 0xa0]),
    ("medium pink", [0xf3, 0x61, 0x96]),
    ("puke brown", [0x94, 0x77, 0x06]),
    ("very light pink", [0xff, 0xf4, 0xf2]),
    ("viridian", [0x1e, 0x91, 0x67]),
    ("bile", [0xb5, 0xc3, 0x06]),
    ("faded yellow", [0xfe, 0xff, 0x7f]),
    ("very pale green", [0xcf, 0xfd, 0xbc]),
    ("vibrant green", [0x0a, 0xdd, 0x08]),
    ("bright lime", [0x87, 0xfd, 0x05]),
    ("spearmint", [0x1e, 0xf8, 0x76]),
    ("light aquamarine", [0x7b, 0xfd, 0xc7]),
    ("light sage", [0xbc, 0xec, 0xac]),
    ("yellowgreen", [0xbb, 0xf9, 0x0f]),
    ("baby poo", [0xab, 0x90, 0x04]),
    ("dark seafoam", [0x1f, 0xb5, 0x7a]),
    ("deep teal", [0x00, 0x55, 0x5a]),
    ("heather", [0xa4, 0x84, 0xac]),
    ("rust orange", [0xc4, 0x55, 0x08]),
    ("dirty blue", [0x3f, 0x82, 0x9d]),
    ("fern green", [0x54, 0x8d, 0x44]),
    ("bright lilac", [0xc9, 0x5e, 0xfb]),
    ("weird green", [0x3a, 0xe5, 0x7f]),
    ("peacock blue", [0x01, 0x67, 0x95]),
    ("avocado green", [0x87, 0xa9, 0x22]),
    ("faded orange", [0xf0, 0x94, 0x4d]),
    ("grape purple", [0x5d, 0x14, 0x51]),
    ("hot green", [0x25, 0xff, 0x29]),
    ("lime yellow", [0xd0, 0xfe, 0x1d]),
    ("mango", [0xff, 0xa6, 0x2b]),
    ("shamrock", [0x01, 0xb4, 0x4c]),
    ("bubblegum", [0xff, 0x6c, 0xb5]),
    ("purplish brown", [0x6b, 0x42, 0x47]),
    ("vomit yellow", [0xc7, 0xc1, 0x0c]),
    ("pale cyan", [0xb7, 0xff, 0xfa]),
    ("key lime", [0xae, 0xff, 0x6e]),
    ("tomato red", [0xec, 0x2d, 0x01]),
    ("lightgreen", [0x76, 0xff, 0x7b]),
    ("merlot", [0x73, 0x00, 0x39]),
    ("night blue", [0x04, 0x03, 0x48]),
    ("purpleish pink", [0xdf, 0x4e, 0xc8]),
    ("apple", [0x6e, 0xcb, 0x3c]),
    ("baby poop green", [0x8f, 0x98, 0x05]),
    ("green apple", [0x5e, 0xdc, 0x1f]),
    ("heliotrope", [0xd9, 0x4f, 0xf5]),
    ("yellow/green", [0xc8, 0xfd, 0x3d]),
    ("almost black", [0x07, 0x0d, 0x0d]),
    ("cool blue", [0x49, 0x84, 0xb8]),
    ("leafy green", [0x51, 0xb7, 0x3b]),
    ("mustard brown", [0xac, 0x7e, 0x04]),
    ("dusk", [0x4e, 0x54, 0x81]),
    ("dull brown", [0x87, 0x6e, 0x4b]),
    ("frog green", [0x58, 0xbc, 0x08]),
    ("vivid green", [0x2f, 0xef, 0x10]),
    ("bright light green", [0x2d, 0xfe, 0x54]),
    ("fluro green", [0x0a, 0xff, 0x02]),
    ("kiwi", [0x9c, 0xef, 0x43]),
    ("seaweed", [0x18, 0xd1, 0x7b]),
    ("navy green", [0x35, 0x53, 0x0a]),
    ("ultramarine blue", [0x18, 0x05, 0xdb]),
    ("iris", [0x62, 0x58, 0xc4]),
    ("pastel orange", [0xff, 0x96, 0x4f]),
    ("yellowish orange", [0xff, 0xab, 0x0f]),
    ("perrywinkle", [0x8f, 0x8c, 0xe7]),
    ("tealish", [0x24, 0xbc, 0xa8]),
    ("dark plum", [0x3f, 0x01, 0x2c]),
    ("pear", [0xcb, 0xf8, 0x5f]),
    ("pinkish orange", [0xff, 0x72, 0x4c]),
    ("midnight purple", [0x28, 0x01, 0x37]),
    ("light urple", [0xb3, 0x6f, 0xf6]),
    ("dark mint", [0x48, 0xc0, 0x72]),
    ("greenish tan", [0xbc, 0xcb, 0x7a]),
    ("light burgundy", [0xa8, 0x41, 0x5b]),
    ("turquoise blue", [0x06, 0xb1, 0xc4]),
    ("ugly pink", [0xcd, 0x75, 0x84]),
    ("sandy", [0xf1, 0xda, 0x7a]),
    ("electric pink", [0xff, 0x04, 0x90]),
    ("muted purple", [0x80, 0x5b, 0x87]),
    ("mid green", [0x50, 0xa7, 0x47]),
    ("greyish", [0xa8, 0xa4, 0x95]),
    ("neon yellow", [0xcf, 0xff, 0x04]),
    ("banana", [0xff, 0xff, 0x7e]),
    ("carnation pink", [0xff, 0x7f, 0xa7]),
    ("tomato", [0xef, 0x40, 0x26]),
    ("sea", [0x3c, 0x99, 0x92]),
    ("muddy brown", [0x88, 0x68, 0x06]),
    ("turquoise green", [0x04, 0xf4, 0x89]),
    ("buff", [0xfe, 0xf6, 0x9e]),
    ("fawn", [0xcf, 0xaf, 0x7b]),
    ("muted blue", [0x3b, 0x71, 0x9f]),
    ("pale rose", [0xfd, 0xc1, 0xc5]),
    ("dark mint green", [0x20, 0xc0, 0x73]),
    ("amethyst", [0x9b, 0x5f, 0xc0]),
    ("blue/green", [0x0f, 0x9b, 0x8e]),
    ("chestnut", [0x74, 0x28, 0x02]),
    ("sick green", [0x9d, 0xb9, 0x2c]),
    ("pea", [0xa4, 0xbf, 0x20]),
    ("rusty orange", [0xcd, 0x59, 0x09]),
    ("stone", [0xad, 0xa5, 0x87]),
    ("rose red", [0xbe, 0x01, 0x3c]),
    ("pale aqua", [0xb8, 0xff, 0xeb]),
    ("deep orange", [0xdc, 0x4d, 0x01]),
    ("earth", [0xa2, 0x65, 0x3e]),
    ("mossy green", [0x63, 0x8b, 0x27]),
    ("grassy green", [0x41, 0x9c, 0x03]),
    ("pale lime green", [0xb1, 0xff, 0x65]),
    ("light grey blue", [0x9d, 0xbc, 0xd4]),
    ("pale grey", [0xfd, 0xfd, 0xfe]),
    ("asparagus", [0x77, 0xab, 0x56]),
    ("blueberry", [0x46, 0x41, 0x96]),
    ("purple red", [0x99, 0x01, 0x47]),
    ("pale lime", [0xbe, 0xfd, 0x73]),
    ("greenish teal", [0x32, 0xbf, 0x84]),
    ("caramel", [0xaf, 0x6f, 0x09]),
    ("deep magenta", [0xa0, 0x02, 0x5c]),
    ("light peach", [0xff, 0xd8, 0xb1]),
    ("milk chocolate", [0x7f, 0x4e, 0x1e]),
    ("ocher", [0xbf, 0x9b, 0x0c]),
    ("off green", [0x6b, 0xa3, 0x53]),
    ("purply pink", [0xf0, 0x75, 0xe6]),
    ("lightblue", [0x7b, 0xc8, 0xf6]),
    ("dusky blue", [0x47, 0x5f, 0x94]),
    ("golden", [0xf5, 0xbf, 0x03]),
    ("light beige", [0xff, 0xfe, 0xb6]),
    ("butter yellow", [0xff, 0xfd, 0x74]),
    ("dusky purple", [0x89, 0x5b, 0x7b]),
    ("french blue", [0x43, 0x6b, 0xad]),
    ("ugly yellow", [0xd0, 0xc1, 0x01]),
    ("greeny yellow", [0xc6, 0xf8, 0x08]),
    ("orangish red", [0xf4, 0x36, 0x05]),
    ("shamrock green", [0x02, 0xc1, 0x4d]),
    ("orangish brown", [0xb2, 0x5f, 0x03]),
    ("tree green", [0x2a, 0x7e, 0x19]),
    ("deep violet", [0x49, 0x06, 0x48]),
    ("gunmetal", [0x53, 0x62, 0x67]),
    ("blue/purple", [0x5a, 0x06, 0xef]),
    ("cherry", [0xcf, 0x02, 0x34]),
    ("sandy brown", [0xc4, 0xa6, 0x61]),
    ("warm grey", [0x97, 0x8a, 0x84]),
    ("dark indigo", [0x1f, 0x09, 0x54]),
    ("midnight", [0x03, 0x01, 0x2d]),
    ("bluey green", [0x2b, 0xb1, 0x79]),
    ("grey pink", [0xc3, 0x90, 0x9b]),
    ("soft purple", [0xa6, 0x6f, 0xb5]),
    ("blood", [0x77, 0x00, 0x01]),
    ("brown red", [0x92, 0x2b, 0x05]),
    ("medium grey", [0x7d, 0x7f, 0x7c]),
    ("berry", [0x99, 0x0f, 0x4b]),
    ("poo", [0x8f, 0x73, 0x03]),
    ("purpley pink", [0xc8, 0x3c, 0xb9]),
    ("light salmon", [0xfe, 0xa9, 0x93]),
    ("snot", [0xac, 0xbb, 0x0d]),
    ("easter purple", [0xc0, 0x71, 0xfe]),
    ("light yellow green", [0xcc, 0xfd, 0x7f]),
    ("dark navy blue", [0x00, 0x02, 0x2e]),
    ("drab", [0x82, 0x83, 0x44]),
    ("light rose", [0xff, 0xc5, 0xcb]),
    ("rouge", [0xab, 0x12, 0x39]),
    ("purplish red", [0xb0, 0x05, 0x4b]),
    ("slime green", [0x99, 0xcc, 0x04]),
    ("baby poop", [0x93, 0x7c, 0x00]),
    ("irish green", [0x01, 0x95, 0x29]),
    ("pink/purple", [0xef, 0x1d, 0xe7]),
    ("dark navy", [0x00, 0x04, 0x35]),
    ("greeny blue", [0x42, 0xb3, 0x95]),
    ("light plum", [0x9d, 0x57, 0x83]),
    ("pinkish grey", [0xc8, 0xac, 0xa9]),
    ("dirty orange", [0xc8, 0x76, 0x06]),
    ("rust red", [0xaa, 0x27, 0x04]),
    ("pale lilac", [0xe4, 0xcb, 0xff]),
    ("orangey red", [0xfa, 0x42, 0x24]),
    ("primary blue", [0x08, 0x04, 0xf9]),
    ("kermit green", [0x5c, 0xb2, 0x00]),
    ("brownish purple", [0x76, 0x42, 0x4e]),
    ("murky green", [0x6c, 0x7a, 0x0e]),
    ("wheat", [0xfb, 0xdd, 0x7e]),
    ("very dark purple", [0x2a, 0x01, 0x34]),
    ("bottle green", [0x04, 0x4a, 0x05]),
    ("watermelon", [0xfd, 0x46, 0x59]),
    ("deep sky blue", [0x0d, 0x75, 0xf8]),
    ("fire engine red", [0xfe, 0x00, 0x02]),
    ("yellow ochre", [0xcb, 0x9d, 0x06]),
    ("pumpkin orange", [0xfb, 0x7d, 0x07]),
    ("pale olive", [0xb9, 0xcc, 0x81]),
    ("light lilac", [0xed, 0xc8, 0xff]),
    ("lightish green", [0x61, 0xe1, 0x60]),
    ("carolina blue", [0x8a, 0xb8, 0xfe]),
    ("mulberry", [0x92, 0x0a, 0x4e]),
    ("shocking pink", [0xfe, 0x02, 0xa2]),
    ("auburn", [0x9a, 0x30, 0x01]),
    ("bright lime green", [0x65, 0xfe, 0x08]),
    ("celadon", [0xbe, 0xfd, 0xb7]),
    ("pinkish brown", [0xb1, 0x72, 0x61]),
    ("poo brown", [0x88, 0x5f, 0x01]),
    ("bright sky blue", [0x02, 0xcc, 0xfe]),
    ("celery", [0xc1, 0xfd, 0x95]),
    ("dirt brown", [0x83, 0x65, 0x39]),
    ("strawberry", [0xfb, 0x29, 0x43]),
    ("dark lime", [0x84, 0xb7, 0x01]),
    ("copper", [0xb6, 0x63, 0x25]),
    ("medium brown", [0x7f, 0x51, 0x12]),
    ("muted green", [0x5f, 0xa0, 0x52]),
    ("robin's egg", [0x6d, 0xed, 0xfd]),
    ("bright aqua", [0x0b, 0xf9, 0xea]),
    ("bright lavender", [0xc7, 0x60, 0xff]),
    ("ivory", [0xff, 0xff, 0xcb]),
    ("very light purple", [0xf6, 0xce, 0xfc]),
    ("light navy", [0x15, 0x50, 0x84]),
    ("pink red", [0xf5, 0x05, 0x4f]),
    ("olive brown", [0x64, 0x54, 0x03]),
    ("poop brown", [0x7a, 0x59, 0x01]),
    ("mustard green", [0xa8, 0xb5, 0x04]),
    ("ocean green", [0x3d, 0x99, 0x73]),
    ("very dark blue", [0x00, 0x01, 0x33]),
    ("dusty green", [0x76, 0xa9, 0x73]),
    ("light navy blue", [0x2e, 0x5a, 0x88]),
    ("minty green", [0x0b, 0xf7, 0x7d]),
    ("adobe", [0xbd, 0x6c, 0x48]),
    ("barney", [0xac, 0x1d, 0xb8]),
    ("jade green", [0x2b, 0xaf, 0x6a]),
    ("bright light blue", [0x26, 0xf7, 0xfd]),
    ("light lime", [0xae, 0xfd, 0x6c]),
    ("dark khaki", [0x9b, 0x8f, 0x55]),
    ("orange yellow", [0xff, 0xad, 0x01]),
    ("ocre", [0xc6, 0x9c, 0x04]),
    ("maize", [0xf4, 0xd0, 0x54]),
    ("faded pink", [0xde, 0x9d, 0xac]),
    ("british racing green", [0x05, 0x48, 0x0d]),
    ("sandstone", [0xc9, 0xae, 0x74]),
    ("mud brown", [0x60, 0x46, 0x0f]),
    ("light sea green", [0x98, 0xf6, 0xb0]),
    ("robin egg blue", [0x8a, 0xf1, 0xfe]),
    ("aqua marine", [0x2e, 0xe8, 0xbb]),
    ("dark sea green", [0x11, 0x87, 0x5d]),
    ("soft pink", [0xfd, 0xb0, 0xc0]),
    ("orangey brown", [0xb1, 0x60, 0x02]),
    ("cherry red", [0xf7, 0x02, 0x2a]),
    ("burnt yellow", [0xd5, 0xab, 0x09]),
    ("brownish grey", [0x86, 0x77, 0x5f]),
    ("camel", [0xc6, 0x9f, 0x59]),
    ("purplish grey", [0x7a, 0x68, 0x7f]),
    ("marine", [0x04, 0x2e, 0x60]),
    ("greyish pink", [0xc8, 0x8d, 0x94]),
    ("pale turquoise", [0xa5, 0xfb, 0xd5]),
    ("pastel yellow", [0xff, 0xfe, 0x71]),
    ("bluey purple", [0x62, 0x41, 0xc7]),
    ("canary yellow", [0xff, 0xfe, 0x40]),
    ("faded red", [0xd3, 0x49, 0x4e]),
    ("sepia", [0x98, 0x5e, 0x2b]),
    ("coffee", [0xa6, 0x81, 0x4c]),
    ("bright magenta", [0xff, 0x08, 0xe8]),
    ("mocha", [0x9d, 0x76, 0x51]),
    ("ecru", [0xfe, 0xff, 0xca]),
    ("purpleish", [0x98, 0x56, 0x8d]),
    ("cranberry", [0x9e, 0x00, 0x3a]),
    ("darkish green", [0x28, 0x7c, 0x37]),
    ("brown orange", [0xb9, 0x69, 0x02]),
    ("dusky rose", [0xba, 0x68, 0x73]),
    ("melon", [0xff, 0x78, 0x55]),
    ("sickly green", [0x94, 0xb2, 0x1c]),
    ("silver", [0xc5, 0xc9, 0xc7]),
    ("purply blue", [0x66, 0x1a, 0xee]),
    ("purpleish blue", [0x61, 0x40, 0xef]),
    ("hospital green", [0x9b, 0xe5, 0xaa]),
    ("shit brown", [0x7b, 0x58, 0x04]),
    ("mid blue", [0x27, 0x6a, 0xb3]),
    ("amber", [0xfe, 0xb3, 0x08]),
    ("easter green", [0x8c, 0xfd, 0x7e]),
    ("soft blue", [0x64, 0x88, 0xea]),
    ("cerulean blue", [0x05, 0x6e, 0xee]),
    ("golden brown", [0xb2, 0x7a, 0x01]),
    ("bright turquoise", [0x0f, 0xfe, 0xf9]),
    ("red pink", [0xfa, 0x2a, 0x55]),
    ("red purple", [0x82, 0x07, 0x47]),
    ("greyish brown", [0x7a, 0x6a, 0x4f]),
    ("vermillion", [0xf4, 0x32, 0x0c]),
    ("russet", [0xa1, 0x39, 0x05]),
    ("steel grey", [0x6f, 0x82, 0x8a]),
    ("lighter purple", [0xa5, 0x5a, 0xf4]),
    ("bright violet", [0xad, 0x0a, 0xfd]),
    ("prussian blue", [0x00, 0x45, 0x77]),
    ("slate green", [0x65, 0x8d, 0x6d]),
    ("dirty pink", [0xca, 0x7b, 0x80]),
    ("dark blue green", [0x00, 0x52, 0x49]),
    ("pine", [0x2b, 0x5d, 0x34]),
    ("yellowy green", [0xbf, 0xf1, 0x28]),
    ("dark gold", [0xb5, 0x94, 0x10]),
    ("bluish", [0x29, 0x76, 0xbb]),
    ("darkish blue", [0x01, 0x41, 0x82]),
    ("dull red", [0xbb, 0x3f, 0x3f]),
    ("pinky red", [0xfc, 0x26, 0x47]),
    ("bronze", [0xa8, 0x79, 0x00]),
    ("pale teal", [0x82, 0xcb, 0xb2]),
    ("military green", [0x66, 0x7c, 0x3e]),
    ("barbie pink", [0xfe, 0x46, 0xa5]),
    ("bubblegum pink", [0xfe, 0x83, 0xcc]),
    ("pea soup green", [0x94, 0xa6, 0x17]),
    ("dark mustard", [0xa8, 0x89, 0x05]),
    ("shit", [0x7f, 0x5f, 0x00]),
    ("medium purple", [0x9e, 0x43, 0xa2]),
    ("very dark green", [0x06, 0x2e, 0x03]),
    ("dirt", [0x8a, 0x6e, 0x45]),
    ("dusky pink", [0xcc, 0x7a, 0x8b]),
    ("red violet", [0x9e, 0x01, 0x68]),
    ("lemon yellow", [0xfd, 0xff, 0x38]),
    ("pistachio", [0xc0, 0xfa, 0x8b]),
    ("dull yellow", [0xee, 0xdc, 0x5b]),
    ("dark lime green", [0x7e, 0xbd, 0x01]),
    ("denim blue", [0x3b, 0x5b, 0x92]),
    ("teal blue", [0x01, 0x88, 0x9f]),
    ("lightish blue", [0x3d, 0x7a, 0xfd]),
    ("purpley blue", [0x5f, 0x34, 0xe7]),
    ("light indigo", [0x6d, 0x5a, 0xcf]),
    ("swamp green", [0x74, 0x85, 0x00]),
    ("brown green", [0x70, 0x6c, 0x11]),
    ("dark maroon", [0x3c, 0x00, 0x08]),
    ("hot purple", [0xcb, 0x00, 0xf5]),
    ("dark forest green", [0x00, 0x2d, 0x04]),
    ("faded blue", [0x65, 0x8c, 0xbb]),
    ("drab green", [0x74, 0x95, 0x51]),
    ("light lime green", [0xb9, 0xff, 0x66]),
    ("snot green", [0x9d, 0xc1, 0x00]),
    ("yellowish", [0xfa, 0xee, 0x66]),
    ("light blue green", [0x7e, 0xfb, 0xb3]),
    ("bordeaux", [0x7b, 0x00, 0x2c]),
    ("light mauve", [0xc2, 0x92, 0xa1]),
    ("ocean", [0x01, 0x7b, 0x92]),
    ("marigold", [0xfc, 0xc0, 0x06]),
    ("muddy green", [0x65, 0x74, 0x32]),
    ("dull orange", [0xd8, 0x86, 0x3b]),
    ("steel", [0x73, 0x85, 0x95]),
    ("electric purple", [0xaa, 0x23, 0xff]),
    ("fluorescent green", [0x08, 0xff, 0x08]),
    ("yellowish brown", [0x9b, 0x7a, 0x01]),
    ("blush", [0xf2, 0x9e, 0x8e]),
    ("soft green", [0x6f, 0xc2, 0x76]),
    ("bright orange", [0xff, 0x5b, 0x00]),
    ("lemon", [0xfd, 0xff, 0x52]),
    ("purple grey", [0x86, 0x6f, 0x85]),
    ("acid green", [0x8f, 0xfe, 0x09]),
    ("pale lavender", [0xee, 0xcf, 0xfe]),
    ("violet blue", [0x51, 0x0a, 0xc9]),
    ("light forest green", [0x4f, 0x91, 0x53]),
    ("burnt red", [0x9f, 0x23, 0x05]),
    ("khaki green", [0x72, 0x86, 0x39]),
    ("cerise", [0xde, 0x0c, 0x62]),
    ("faded purple", [0x91, 0x6e, 0x99]),
    ("apricot", [0xff, 0xb1, 0x6d]),
    ("dark olive green", [0x3c, 0x4d, 0x03]),
    ("grey brown", [0x7f, 0x70, 0x53]),
    ("green grey", [0x77, 0x92, 0x6f]),
    ("true blue", [0x01, 0x0f, 0xcc]),
    ("pale violet", [0xce, 0xae, 0xfa]),
    ("periwinkle blue", [0x8f, 0x99, 0xfb]),
    ("light sky blue", [0xc6, 0xfc, 0xff]),
    ("blurple", [0x55, 0x39, 0xcc]),
    ("green brown", [0x54, 0x4e, 0x03]),
    ("bluegreen", [0x01, 0x7a, 0x79]),
    ("bright teal", [0x01, 0xf9, 0xc6]),
    ("brownish yellow", [0xc9, 0xb0, 0x03]),
    ("pea soup", [0x92, 0x99, 0x01]),
    ("forest", [0x0b, 0x55, 0x09]),
    ("barney purple", [0xa0, 0x04, 0x98]),
    ("ultramarine", [0x20, 0x00, 0xb1]),
    ("purplish", [0x94, 0x56, 0x8c]),
    ("puke yellow", [0xc2, 0xbe, 0x0e]),
    ("bluish grey", [0x74, 0x8b, 0x97]),
    ("dark periwinkle", [0x66, 0x5f, 0xd1]),
    ("dark lilac", [0x9c, 0x6d, 0xa5]),
    ("reddish", [0xc4, 0x42, 0x40]),
    ("light maroon", [0xa2, 0x48, 0x57]),
    ("dusty purple", [0x82, 0x5f, 0x87]),
    ("terra cotta", [0xc9, 0x64, 0x3b]),
    ("avocado", [0x90, 0xb1, 0x34]),
    ("marine blue", [0x01, 0x38, 0x6a]),
    ("teal green", [0x25, 0xa3, 0x6f]),
    ("slate grey", [0x59, 0x65, 0x6d]),
    ("lighter green", [0x75, 0xfd, 0x63]),
    ("electric green", [0x21, 0xfc, 0x0d]),
    ("dusty blue", [0x5a, 0x86, 0xad]),
    ("golden yellow", [0xfe, 0xc6, 0x15]),
    ("bright yellow", [0xff, 0xfd, 0x01]),
    ("light lavender", [0xdf, 0xc5, 0xfe]),
    ("umber", [0xb2, 0x64, 0x00]),
    ("poop", [0x7f, 0x5e, 0x00]),
    ("dark peach", [0xde, 0x7e, 0x5d]),
    ("jungle green", [0x04, 0x82, 0x43]),
    ("eggshell", [0xff, 0xff, 0xd4]),
    ("denim", [0x3b, 0x63, 0x8c]),
    ("yellow brown", [0xb7, 0x94, 0x00]),
    ("dull purple", [0x84, 0x59, 0x7e]),
    ("chocolate brown", [0x41, 0x19, 0x00]),
    ("wine red", [0x7b, 0x03, 0x23]),
    ("neon blue", [0x04, 0xd9, 0xff]),
    ("dirty green", [0x66, 0x7e, 0x2c]),
    ("light tan", [0xfb, 0xee, 0xac]),
    ("ice blue", [0xd7, 0xff, 0xfe]),
    ("cadet blue", [0x4e, 0x74, 0x96]),
    ("dark mauve", [0x87, 0x4c, 0x62]),
    ("very light blue", [0xd5, 0xff, 0xff]),
    ("grey purple", [0x82, 0x6d, 0x8c]),
    ("pastel pink", [0xff, 0xba, 0xcd]),
    ("very light green", [0xd1, 0xff, 0xbd]),
    ("dark sky blue", [0x44, 0x8e, 0xe4]),
    ("evergreen", [0x05, 0x47, 0x2a]),
    ("dull pink", [0xd5, 0x86, 0x9d]),
    ("aubergine", [0x3d, 0x07, 0x34]),
    ("mahogany", [0x4a, 0x01, 0x00]),
    ("reddish orange", [0xf8, 0x48, 0x1c]),
    ("deep green", [0x02, 0x59, 0x0f]),
    ("vomit green", [0x89, 0xa2, 0x03]),
    ("purple pink", [0xe0, 0x3f, 0xd8]),
    ("dusty pink", [0xd5, 0x8a, 0x94]),
    ("faded green", [0x7b, 0xb2, 0x74]),
    ("camo green", [0x52, 0x65, 0x25]),
    ("pinky purple", [0xc9, 0x4c, 0xbe]),
    ("pink purple", [0xdb, 0x4b, 0xda]),
    ("brownish red", [0x9e, 0x36, 0x23]),
    ("dark rose", [0xb5, 0x48, 0x5d]),
    ("mud", [0x73, 0x5c, 0x12]),
    ("brownish", [0x9c, 0x6d, 0x57]),
    ("emerald green", [0x02, 0x8f, 0x1e]),
    ("pale brown", [0xb1, 0x91, 0x6e]),
    ("dull blue", [0x49, 0x75, 0x9c]),
    ("burnt umber", [0xa0, 0x45, 0x0e]),
    ("medium green", [0x39, 0xad, 0x48]),
    ("clay", [0xb6, 0x6a, 0x50]),
    ("light aqua", [0x8c, 0xff, 0xdb]),
    ("light olive green", [0xa4, 0xbe, 0x5c]),
    ("brownish orange", [0xcb, 0x77, 0x23]),
    ("dark aqua", [0x05, 0x69, 0x6b]),
    ("purplish pink", [0xce, 0x5d, 0xae]),
    ("dark salmon", [0xc8, 0x5a, 0x53]),
    ("greenish grey", [0x96, 0xae, 0x8d]),
    ("jade", [0x1f, 0xa7, 0x74]),
    ("ugly green", [0x7a, 0x97, 0x03]),
    ("dark beige", [0xac, 0x93, 0x62]),
    ("emerald", [0x01, 0xa0, 0x49]),
    ("pale red", [0xd9, 0x54, 0x4d]),
    ("light magenta", [0xfa, 0x5f, 0xf7]),
    ("sky", [0x82, 0xca, 0xfc]),
    ("light cyan", [0xac, 0xff, 0xfc]),
    ("yellow orange", [0xfc, 0xb0, 0x01]),
    ("reddish purple", [0x91, 0x09, 0x51]),
    ("reddish pink", [0xfe, 0x2c, 0x54]),
    ("orchid", [0xc8, 0x75, 0xc4]),
    ("dirty yellow", [0xcd, 0xc5, 0x0a]),
    ("orange red", [0xfd, 0x41, 0x1e]),
    ("deep red", [0x9a, 0x02, 0x00]),
    ("orange brown", [0xbe, 0x64, 0x00]),
    ("cobalt blue", [0x03, 0x0a, 0xa7]),
    ("neon pink", [0xfe, 0x01, 0x9a]),
    ("rose pink", [0xf7, 0x87, 0x9a]),
    ("greyish purple", [0x88, 0x71, 0x91]),
    ("raspberry", [0xb0, 0x01, 0x49]),
    ("aqua green", [0x12, 0xe1, 0x93]),
    ("salmon pink", [0xfe, 0x7b, 0x7c]),
    ("tangerine", [0xff, 0x94, 0x08]),
    ("brownish green", [0x6a, 0x6e, 0x09]),
    ("red brown", [0x8b, 0x2e, 0x16]),
    ("greenish brown", [0x69, 0x61, 0x12]),
    ("pumpkin", [0xe1, 0x77, 0x01]),
    ("pine green", [0x0a, 0x48, 0x1e]),
    ("charcoal", [0x34, 0x38, 0x37]),
    ("baby pink", [0xff, 0xb7, 0xce]),
    ("cornflower", [0x6a, 0x79, 0xf7]),
    ("blue violet", [0x5d, 0x06, 0xe9]),
    ("chocolate", [0x3d, 0x1c, 0x02]),
    ("greyish green", [0x82, 0xa6, 0x7d]),
    ("scarlet", [0xbe, 0x01, 0x19]),
    ("green yellow", [0xc9, 0xff, 0x27]),
    ("dark olive", [0x37, 0x3e, 0x02]),
    ("sienna", [0xa9, 0x56, 0x1e]),
    ("pastel purple", [0xca, 0xa0, 0xff]),
    ("terracotta", [0xca, 0x66, 0x41]),
    ("aqua blue", [0x02, 0xd8, 0xe9]),
    ("sage green", [0x88, 0xb3, 0x78]),
    ("blood red", [0x98, 0x00, 0x02]),
    ("deep pink", [0xcb, 0x01, 0x62]),
    ("grass", [0x5c, 0xac, 0x2d]),
    ("moss", [0x76, 0x99, 0x58]),
    ("pastel blue", [0xa2, 0xbf, 0xfe]),
    ("bluish green", [0x10, 0xa6, 0x74]),
    ("green blue", [0x06, 0xb4, 0x8b]),
    ("dark tan", [0xaf, 0x88, 0x4a]),
    ("greenish blue", [0x0b, 0x8b, 0x87]),
    ("pale orange", [0xff, 0xa7, 0x56]),
    ("vomit", [0xa2, 0xa4, 0x15]),
    ("forrest green", [0x15, 0x44, 0x06]),
    ("dark lavender", [0x85, 0x67, 0x98]),
    ("dark violet", [0x34, 0x01, 0x3f]),
    ("purple blue", [0x63, 0x2d, 0xe9]),
    ("dark cyan", [0x0a, 0x88, 0x8a]),
    ("olive drab", [0x6f, 0x76, 0x32]),
    ("pinkish", [0xd4, 0x6a, 0x7e]),
    ("cobalt", [0x1e, 0x48, 0x8f]),
    ("neon purple", [0xbc, 0x13, 0xfe]),
    ("light turquoise", [0x7e, 0xf4, 0xcc]),
    ("apple green", [0x76, 0xcd, 0x26]),
    ("dull green", [0x74, 0xa6, 0x62]),
    ("wine", [0x80, 0x01, 0x3f]),
    ("powder blue", [0xb1, 0xd1, 0xfc]),
    ("off white", [0xff, 0xff, 0xe4]),
    ("electric blue", [0x06, 0x52, 0xff]),
    ("dark turquoise", [0x04, 0x5c, 0x5a]),
    ("blue purple", [0x57, 0x29, 0xce]),
    ("azure", [0x06, 0x9a, 0xf3]),
    ("bright red", [0xff, 0x00, 0x0d]),
    ("pinkish red", [0xf1, 0x0c, 0x45]),
    ("cornflower blue", [0x51, 0x70, 0xd7]),
    ("light olive", [0xac, 0xbf, 0x69]),
    ("grape", [0x6c, 0x34, 0x61]),
    ("greyish blue", [0x5e, 0x81, 0x9d]),
    ("purplish blue", [0x60, 0x1e, 0xf9]),
    ("yellowish green", [0xb0, 0xdd, 0x16]),
    ("greenish yellow", [0xcd, 0xfd, 0x02]),
    ("medium blue", [0x2c, 0x6f, 0xbb]),
    ("dusty rose", [0xc0, 0x73, 0x7a]),
    ("light violet", [0xd6, 0xb4, 0xfc]),
    ("midnight blue", [0x02, 0x00, 0x35]),
    ("bluish purple", [0x70, 0x3b, 0xe7]),
    ("red orange", [0xfd, 0x3c, 0x06]),
    ("dark magenta", [0x96, 0x00, 0x56]),
    ("greenish", [0x40, 0xa3, 0x68]),
    ("ocean blue", [0x03, 0x71, 0x9c]),
    ("coral", [0xfc, 0x5a, 0x50]),
    ("cream", [0xff, 0xff, 0xc2]),
    ("reddish brown", [0x7f, 0x2b, 0x0a]),
    ("burnt sienna", [0xb0, 0x4e, 0x0f]),
    ("brick", [0xa0, 0x36, 0x23]),
    ("sage", [0x87, 0xae, 0x73]),
    ("grey green", [0x78, 0x9b, 0x73]),
    ("white", [0xff, 0xff, 0xff]),
    ("robin's egg blue", [0x98, 0xef, 0xf9]),
    ("moss green", [0x65, 0x8b, 0x38]),
    ("steel blue", [0x5a, 0x7d, 0x9a]),
    ("eggplant", [0x38, 0x08, 0x35]),
    ("light yellow", [0xff, 0xfe, 0x7a]),
    ("leaf green", [0x5c, 0xa9, 0x04]),
    ("light grey", [0xd8, 0xdc, 0xd6]),
    ("puke", [0xa5, 0xa5, 0x02]),
    ("pinkish purple", [0xd6, 0x48, 0xd7]),
    ("sea blue", [0x04, 0x74, 0x95]),
    ("pale purple", [0xb7, 0x90, 0xd4]),
    ("slate blue", [0x5b, 0x7c, 0x99]),
    ("blue grey", [0x60, 0x7c, 0x8e]),
    ("hunter green", [0x0b, 0x40, 0x08]),
    ("fuchsia", [0xed, 0x0d, 0xd9]),
    ("crimson", [0x8c, 0x00, 0x0f]),
    ("pale yellow", [0xff, 0xff, 0x84]),
    ("ochre", [0xbf, 0x90, 0x05]),
    ("mustard yellow", [0xd2, 0xbd, 0x0a]),
    ("light red", [0xff, 0x47, 0x4c]),
    ("cerulean", [0x04, 0x85, 0xd1]),
    ("pale pink", [0xff, 0xcf, 0xdc]),
    ("deep blue", [0x04, 0x02, 0x73]),
    ("rust", [0xa8, 0x3c, 0x09]),
    ("light teal", [0x90, 0xe4, 0xc1]),
    ("slate", [0x51, 0x65, 0x72]),
    ("goldenrod", [0xfa, 0xc2, 0x05]),
    ("dark yellow", [0xd5, 0xb6, 0x0a]),
    ("dark grey", [0x36, 0x37, 0x37]),
    ("army green", [0x4b, 0x5d, 0x16]),
    ("grey blue", [0x6b, 0x8b, 0xa4]),
    ("seafoam", [0x80, 0xf9, 0xad]),
    ("puce", [0xa5, 0x7e, 0x52]),
    ("spring green", [0xa9, 0xf9, 0x71]),
    ("dark orange", [0xc6, 0x51, 0x02]),
    ("sand", [0xe2, 0xca, 0x76]),
    ("pastel green", [0xb0, 0xff, 0x9d]),
    ("mint", [0x9f, 0xfe, 0xb0]),
    ("light orange", [0xfd, 0xaa, 0x48]),
    ("bright pink", [0xfe, 0x01, 0xb1]),
    ("chartreuse", [0xc1, 0xf8, 0x0a]),
    ("deep purple", [0x36, 0x01, 0x3f]),
    ("dark brown", [0x34, 0x1c, 0x02]),
    ("taupe", [0xb9, 0xa2, 0x81]),
    ("pea green", [0x8e, 0xab, 0x12]),
    ("puke green", [0x9a, 0xae, 0x07]),
    ("kelly green", [0x02, 0xab, 0x2e]),
    ("seafoam green", [0x7a, 0xf9, 0xab]),
    ("blue green", [0x13, 0x7e, 0x6d]),
    ("khaki", [0xaa, 0xa6, 0x62]),
    ("burgundy", [0x61, 0x00, 0x23]),
    ("dark teal", [0x01, 0x4d, 0x4e]),
    ("brick red", [0x8f, 0x14, 0x02]),
    ("royal purple", [0x4b, 0x00, 0x6e]),
    ("plum", [0x58, 0x0f, 0x41]),
    ("mint green", [0x8f, 0xff, 0x9f]),
    ("gold", [0xdb, 0xb4, 0x0c]),
    ("baby blue", [0xa2, 0xcf, 0xfe]),
    ("yellow green", [0xc0, 0xfb, 0x2d]),
    ("bright purple", [0xbe, 0x03, 0xfd]),
    ("dark red", [0x84, 0x00, 0x00]),
    ("pale blue", [0xd0, 0xfe, 0xfe]),
    ("grass green", [0x3f, 0x9b, 0x0b]),
    ("navy", [0x01, 0x15, 0x3e]),
    ("aquamarine", [0x04, 0xd8, 0xb2]),
    ("burnt orange", [0xc0, 0x4e, 0x01]),
    ("neon green", [0x0c, 0xff, 0x0c]),
    ("bright blue", [0x01, 0x65, 0xfc]),
    ("rose", [0xcf, 0x62, 0x75]),
    ("light pink", [0xff, 0xd1, 0xdf]),
    ("mustard", [0xce, 0xb3, 0x01]),
    ("indigo", [0x38, 0x02, 0x82]),
    ("lime", [0xaa, 0xff, 0x32]),
    ("sea green", [0x53, 0xfc, 0xa1]),
    ("periwinkle", [0x8e, 0x82, 0xfe]),
    ("dark pink", [0xcb, 0x41, 0x6b]),
    ("olive green", [0x67, 0x7a, 0x04]),
    ("peach", [0xff, 0xb0, 0x7c]),
    ("pale green", [0xc7, 0xfd, 0xb5]),
    ("light brown", [0xad, 0x81, 0x50]),
    ("hot pink", [0xff, 0x02, 0x8d]),
    ("black", [0x00, 0x00, 0x00]),
    ("lilac", [0xce, 0xa2, 0xfd]),
    ("navy blue", [0x00, 0x11, 0x46]),
    ("royal blue", [0x05, 0x04, 0xaa]),
    ("beige", [0xe6, 0xda, 0xa6]),
    ("salmon", [0xff, 0x79, 0x6c]),
    ("olive", [0x6e, 0x75, 0x0e]),
    ("maroon", [0x65, 0x00, 0x21]),
    ("bright green", [0x01, 0xff, 0x07]),
    ("dark purple", [0x35, 0x06, 0x3e]),
    ("mauve", [0xae, 0x71, 0x81]),
    ("forest green", [0x06, 0x47, 0x0c]),
    ("aqua", [0x13, 0xea, 0xc9]),
    ("cyan", [0x00, 0xff, 0xff]),
    ("tan", [0xd1, 0xb2, 0x6f]),
    ("dark blue", [0x00, 0x03, 0x5b]),
    ("lavender", [0xc7, 0x9f, 0xef]),
    ("turquoise", [0x06, 0xc2, 0xac]),
    ("dark green", [0x03, 0x35, 0x00]),
    ("violet", [0x9a, 0x0e, 0xea]),
    ("light purple", [0xbf, 0x77, 0xf6]),
    ("lime green", [0x89, 0xfe, 0x05]),
    ("grey", [0x92, 0x95, 0x91]),
    ("sky blue", [0x75, 0xbb, 0xfd]),
    ("yellow", [0xff, 0xff, 0x14]),
    ("magenta", [0xc2, 0x00, 0x78]),
    ("light green", [0x96, 0xf9, 0x7b]),
    ("orange", [0xf9, 0x73, 0x06]),
    ("teal", [0x02, 0x93, 0x86]),
    ("light blue", [0x95, 0xd0, 0xfc]),
    ("red", [0xe5, 0x00, 0x00]),
    ("brown", [0x65, 0x37, 0x00]),
    ("pink", [0xff, 0x81, 0xc0]),
    ("blue", [0x03, 0x43, 0xdf]),
    ("green", [0x15, 0xb0, 0x1a]),
    ("purple", [0x7e, 0x1e, 0x9c]),
];

// W3C extended color keywords — https://www.w3.org/TR/css3-color/
// Number of colors: 147
pub(crate) static CSS: [(&str, [u8; 3]); 147] = [
    ("aliceblue", [0xf0, 0xf8, 0xff]),
    ("antiquewhite", [0xfa, 0xeb, 0xd7]),
    ("aqua", [0x00, 0xff, 0xff]),
    ("aquamarine", [0x7f, 0xff, 0xd4]),
    ("azure", [0xf0, 0xff, 0xff]),
    ("beige", [0xf5, 0xf5, 0xdc]),
    ("bisque", [0xff, 0xe4, 0xc4]),
    ("black", [0x00, 0x00, 0x00]),
    ("blanchedalmond", [0xff, 0xeb, 0xcd]),
    ("blue", [0x00, 0x00, 0xff]),
    ("blueviolet", [0x8a, 0x2b, 0xe2]),
    ("brown", [0xa5, 0x2a, 0x2a]),
    ("burlywood", [0xde, 0xb8, 0x87]),
    ("cadetblue", [0x5f, 0x9e, 0xa0]),
    ("chartreuse", [0x7f, 0xff, 0x00]),
    ("chocolate", [0xd2, 0x69, 0x1e]),
    ("coral", [0xff, 0x7f, 0x50]),
    ("cornflowerblue", [0x64, 0x95, 0xed]),
    ("cornsilk", [0xff, 0xf8, 0xdc]),
    ("crimson", [0xdc, 0x14, 0x3c]),
    ("cyan", [0x00, 0xff, 0xff]),
    ("darkblue", [0x00, 0x00, 0x8b]),
    ("darkcyan", [0x00, 0x8b, 0x8b]),
    ("darkgoldenrod", [0xb8, 0x86, 0x0b]),
    ("darkgray", [0xa9, 0xa9, 0xa9]),
    ("darkgreen", [0x00, 0x64, 0x00]),
    ("darkgrey", [0xa9, 0xa9, 0xa9]),
    ("darkkhaki", [0xbd, 0xb7, 0x6b]),
    ("darkmagenta", [0x8b, 0x00, 0x8b]),
    ("darkolivegreen", [0x55, 0x6b, 0x2f]),
    ("darkorange", [0xff, 0x8c, 0x00]),
    ("darkorchid", [0x99, 0x32, 0xcc]),
    ("darkred", [0x8b, 0x00, 0x00]),
    ("darksalmon", [0xe9, 0x96, 0x7a]),
    ("darkseagreen", [0x8f, 0xbc, 0x8f]),
    ("darkslateblue", [0x48, 0x3d, 0x8b]),
    ("darkslategray", [0x2f, 0x4f, 0x4f]),
    ("darkslategrey", [0x2f, 0x4f, 0x4f]),
    ("darkturquoise", [0x00, 0xce, 0xd1]),
    ("darkviolet", [0x94, 0x00, 0xd3]),
    ("deeppink", [0xff, 0x14, 0x93]),
    ("deepskyblue", [0x00, 0xbf, 0xff]),
    ("dimgray", [0x69, 0x69, 0x69]),
    ("dimgrey", [0x69, 0x69, 0x69]),
    ("dodgerblue", [0x1e, 0x90, 0xff]),
    ("firebrick", [0xb2, 0x22, 0x22]),
    ("floralwhite", [0xff, 0xfa, 0xf0]),
    ("forestgreen", [0x22, 0x8b, 0x22]),
    ("fuchsia", [0xff, 0x00, 0xff]),
    ("gainsboro", [0xdc, 0xdc, 0xdc]),
    ("ghostwhite", [0xf8, 0xf8, 0xff]),
    ("gold", [0xff, 0xd7, 0x00]),
    ("goldenrod", [0xda, 0xa5, 0x20]),
    ("gray", [0x80, 0x80, 0x80]),
    ("green", [0x00, 0x80, 0x00]),
    ("greenyellow", [0xad, 0xff, 0x2f]),
    ("grey", [0x80, 0x80, 0x80]),
    ("honeydew", [0xf0, 0xff, 0xf0]),
    ("hotpink", [0xff, 0x69, 0xb4]),
    ("indianred", [0xcd, 0x5c, 0x5c]),
    ("indigo", [0x4b, 0x00, 0x82]),
    ("ivory", [0xff, 0xff, 0xf0]),
    ("khaki", [0xf0, 0xe6, 0x8c]),
    ("lavender", [0xe6, 0xe6, 0xfa]),
    ("lavenderblush", [0xff, 0xf0, 0xf5]),
    ("lawngreen", [0x7c, 0xfc, 0x00]),
    ("lemonchiffon", [0xff, 0xfa, 0xcd]),
    ("lightblue", [0xad, 0xd8, 0xe6]),
    ("lightcoral", [0xf0, 0x80, 0x80]),
    ("lightcyan", [0xe0, 0xff, 0xff]),
    ("lightgoldenrodyellow", [0xfa, 0xfa, 0xd2]),
    ("lightgray", [0xd3, 0xd3, 0xd3]),
    ("lightgreen", [0x90, 0xee, 0x90]),
    ("lightgrey", [0xd3, 0xd3, 0xd3]),
    ("lightpink", [0xff, 0xb6, 0xc1]),
    ("lightsalmon", [0xff, 0xa0, 0x7a]),
    ("lightseagreen", [0x20, 0xb2, 0xaa]),
    ("lightskyblue", [0x87, 0xce, 0xfa]),
    ("lightslategray", [0x77, 0x88, 0x99]),
    ("lightslategrey", [0x77, 0x88, 0x99]),
    ("lightsteelblue", [0xb0, 0xc4, 0xde]),
    ("lightyellow", [0xff, 0xff, 0xe0]),
    ("lime", [0x00, 0xff, 0x00]),
    ("limegreen", [0x32, 0xcd, 0x32]),
    ("linen", [0xfa, 0xf0, 0xe6]),
    ("magenta", [0xff, 0x00, 0xff]),
    ("maroon", [0x80, 0x00, 0x00]),
    ("mediumaquamarine", [0x66, 0xcd, 0xaa]),
    ("mediumblue", [0x00, 0x00, 0xcd]),
    ("mediumorchid", [0xba, 0x55, 0xd3]),
    ("mediumpurple", [0x93, 0x70, 0xdb]),
    ("mediumseagreen", [0x3c, 0xb3, 0x71]),
    ("mediumslateblue", [0x7b, 0x68, 0xee]),
    ("mediumspringgreen", [0x00, 0xfa, 0x9a]),
    ("mediumturquoise", [0x48, 0xd1, 0xcc]),
    ("mediumvioletred", [0xc7, 0x15, 0x85]),
    ("midnightblue", [0x19, 0x19, 0x70]),
    ("mintcream", [0xf5, 0xff, 0xfa]),
    ("mistyrose", [0xff, 0xe4, 0xe1]),
    ("moccasin", [0xff, 0xe4, 0xb5]),
    ("navajowhite", [0xff, 0xde, 0xad]),
    ("navy", [0x00, 0x00, 0x80]),
    ("oldlace", [0xfd, 0xf5, 0xe6]),
    ("olive", [0x80, 0x80, 0x00]),
    ("olivedrab", [0x6b, 0x8e, 0x23]),
    ("orange", [0xff, 0xa5, 0x00]),
    ("orangered", [0xff, 0x45, 0x00]),
    ("orchid", [0xda, 0x70, 0xd6]),
    ("palegoldenrod", [0xee, 0xe8, 0xaa]),
    ("palegreen", [0x98, 0xfb, 0x98]),
    ("paleturquoise", [0xaf, 0xee, 0xee]),
    ("palevioletred", [0xdb, 0x70, 0x93]),
    ("papayawhip", [0xff, 0xef, 0xd5]),
    ("peachpuff", [0xff, 0xda, 0xb9]),
    ("peru", [0xcd, 0x85, 0x3f]),
    ("pink", [0xff, 0xc0, 0xcb]),
    ("plum", [0xdd, 0xa0, 0xdd]),
    ("powderblue", [0xb0, 0xe0, 0xe6]),
    ("purple", [0x80, 0x00, 0x80]),
    ("red", [0xff, 0x00, 0x00]),
    ("rosybrown", [0xbc, 0x8f, 0x8f]),
    ("royalblue", [0x41, 0x69, 0xe1]),
    ("saddlebrown", [0x8b, 0x45, 0x13]),
    ("salmon", [0xfa, 0x80, 0x72]),
    ("sandybrown", [0xf4, 0xa4, 0x60]),
    ("seagreen", [0x2e, 0x8b, 0x57]),
    ("seashell", [0xff, 0xf5, 0xee]),
    ("sienna", [0xa0, 0x52, 0x2d]),
    ("silver", [0xc0, 0xc0, 0xc0]),
    ("skyblue", [0x87, 0xce, 0xeb]),
    ("slateblue", [0x6a, 0x5a, 0xcd]),
    ("slategray", [0x70, 0x80, 0x90]),
    ("slategrey", [0x70, 0x80, 0x90]),
    ("snow", [0xff, 0xfa, 0xfa]),
    ("springgreen", [0x00, 0xff, 0x7f]),
    ("steelblue", [0x46, 0x82, 0xb4]),
    ("tan", [0xd2, 0xb4, 0x8c]),
    ("teal", [0x00, 0x80, 0x80]),
    ("thistle", [0xd8, 0xbf, 0xd8]),
    ("tomato", [0xff, 0x63, 0x47]),
    ("turquoise", [0x40, 0xe0, 0xd0]),
    ("violet", [0xee, 0x82, 0xee]),
    ("wheat", [0xf5, 0xde, 0xb3]),
    ("white", [0xff, 0xff, 0xff]),
    ("whitesmoke", [0xf5, 0xf5, 0xf5]),
    ("yellow", [0xff, 0xff, 0x00]),
    ("yellowgreen", [0x9a, 0xcd, 0x32]),
];

// Curated palettes
// Number of palettes: 28
pub(crate) static CURATED: [CuratedData; 28] = [
    CuratedData {
        name: "Accent",
        typ: PaletteType::Qual,
        rgb: &[[0x7f, 0xc9, 0x7f], [0xbe, 0xae, 0xd4], [0xfd, 0xc0, 0x86], [0xff, 0xff, 0x99], [0x38, 0x6c, 0xb0], [0xf0, 0x02, 0x7f], [0xbf, 0x5b, 0x17], [0x66, 0x66, 0x66]],
    },
    CuratedData {
        name: "Blues",
        typ: PaletteType::Seq,
        rgb: &[[0xf7, 0xfb, 0xff], [0xde, 0xeb, 0xf7], [0xc6, 0xdb, 0xef], [0x9e, 0xca, 0xe1], [0x6b, 0xae, 0xd6], [0x42, 0x92, 0xc6], [0x21, 0x71, 0xb5], [0x08, 0x51, 0x9c], [0x08, 0x30, 0x6b]],
    },
    CuratedData {
        name: "Dark2",
        typ: PaletteType::Qual,
        rgb: &[[0x1b, 0x9e, 0x77], [0xd9, 0x5f, 0x02], [0x75, 0x70, 0xb3], [0xe7, 0x29, 0x8a], [0x66, 0xa6, 0x1e], [0xe6, 0xab, 0x02], [0xa6, 0x76, 0x1d], [0x66, 0x66, 0x66]],
    },
    CuratedData {
        name: "Greens",
        typ: PaletteType::Seq,
        rgb: &[[0xf7, 0xfc, 0xf5], [0xe5, 0xf5, 0xe0], [0xc7, 0xe9, 0xc0], [0xa1, 0xd9, 0x9b], [0x74, 0xc4, 0x76], [0x41, 0xab, 0x5d], [0x23, 0x8b, 0x45], [0x00, 0x6d, 0x2c], [0x00, 0x44, 0x1b]],
    },
    CuratedData {
        name: "Greys",
        typ: PaletteType::Seq,
        rgb: &[[0xff, 0xff, 0xff], [0xf0, 0xf0, 0xf0], [0xd9, 0xd9, 0xd9], [0xbd, 0xbd, 0xbd], [0x96, 0x96, 0x96], [0x73, 0x73, 0x73], [0x52, 0x52, 0x52], [0x25, 0x25, 0x25], [0x00, 0x00, 0x00]],
    },
    CuratedData {
        name: "Oranges",
        typ: PaletteType::Seq,
        rgb: &[[0xff, 0xf5, 0xeb], [0xfe, 0xe6, 0xce], [0xfd, 0xd0, 0xa2], [0xfd, 0xae, 0x6b], [0xfd, 0x8d, 0x3c], [0xf1, 0x69, 0x13], [0xd9, 0x48, 0x01], [0xa6, 0x36, 0x03], [0x7f, 0x27, 0x04]],
    },
    CuratedData {
        name: "Paired",
        typ: PaletteType::Qual,
        rgb: &[[0xa6, 0xce, 0xe3], [0x1f, 0x78, 0xb4], [0xb2, 0xdf, 0x8a], [0x33, 0xa0, 0x2c], [0xfb, 0x9a, 0x99], [0xe3, 0x1a, 0x1c], [0xfd, 0xbf, 0x6f], [0xff, 0x7f, 0x00], [0xca, 0xb2, 0xd6], [0x6a, 0x3d, 0x9a], [0xff, 0xff, 0x99], [0xb1, 0x59, 0x28]],
    },
    CuratedData {
        name: "Pastel1",
        typ: PaletteType::Qual,
        rgb: &[[0xfb, 0xb4, 0xae], [0xb3, 0xcd, 0xe3], [0xcc, 0xeb, 0xc5], [0xde, 0xcb, 0xe4], [0xfe, 0xd9, 0xa6], [0xff, 0xff, 0xcc], [0xe5, 0xd8, 0xbd], [0xfd, 0xda, 0xec], [0xf2, 0xf2, 0xf2]],
    },
    CuratedData {
        name: "Pastel2",
        typ: PaletteType::Qual,
        rgb: &[[0xb3, 0xe2, 0xcd], [0xfd, 0xcd, 0xac], [0xcb, 0xd5, 0xe8], [0xf4, 0xca, 0xe4], [0xe6, 0xf5, 0xc9], [0xff, 0xf2, 0xae], [0xf1, 0xe2, 0xcc], [0xcc, 0xcc, 0xcc]],
    },
    CuratedData {
        name: "Purples",
        typ: PaletteType::Seq,
        rgb: &[[0xfc, 0xfb, 0xfd], [0xef, 0xed, 0xf5], [0xda, 0xda, 0xeb], [0xbc, 0xbd, 0xdc], [0x9e, 0x9a, 0xc8], [0x80, 0x7d, 0xba], [0x6a, 0x51, 0xa3], [0x54, 0x27, 0x8f], [0x3f, 0x00, 0x7d]],
    },
    CuratedData {
        name: "RdBu",
        typ: PaletteType::Div,
        rgb: &[[0x67, 0x00, 0x1f], [0xb2, 0x18, 0x2b], [0xd6, 0x60, 0x4d], [0xf4, 0xa5, 0x82], [0xfd, 0xdb, 0xc7], [0xf7, 0xf7, 0xf7], [0xd1, 0xe5, 0xf0], [0x92, 0xc5, 0xde], [0x43, 0x93, 0xc3], [0x21, 0x66, 0xac], [0x05, 0x30, 0x61]],
    },
    CuratedData {
        name: "Reds",
        typ: PaletteType::Seq,
        rgb: &[[0xff, 0xf5, 0xf0], [0xfe, 0xe0, 0xd2], [0xfc, 0xbb, 0xa1], [0xfc, 0x92, 0x72], [0xfb, 0x6a, 0x4a], [0xef, 0x3b, 0x2c], [0xcb, 0x18, 0x1d], [0xa5, 0x0f, 0x15], [0x67, 0x00, 0x0d]],
    },
    CuratedData {
        name: "Set1",
        typ: PaletteType::Qual,
        rgb: &[[0xe4, 0x1a, 0x1c], [0x37, 0x7e, 0xb8], [0x4d, 0xaf, 0x4a], [0x98, 0x4e, 0xa3], [0xff, 0x7f, 0x00], [0xff, 0xff, 0x33], [0xa6, 0x56, 0x28], [0xf7, 0x81, 0xbf], [0x99, 0x99, 0x99]],
    },
    CuratedData {
        name: "Set2",
        typ: PaletteType::Qual,
        rgb: &[[0x66, 0xc2, 0xa5], [0xfc, 0x8d, 0x62], [0x8d, 0xa0, 0xcb], [0xe7, 0x8a, 0xc3], [0xa6, 0xd8, 0x54], [0xff, 0xd9, 0x2f], [0xe5, 0xc4, 0x94], [0xb3, 0xb3, 0xb3]],
    },
    CuratedData {
        name: "Set3",
        typ: PaletteType::Qual,
        rgb: &[[0x8d, 0xd3, 0xc7], [0xff, 0xff, 0xb3], [0xbe, 0xba, 0xda], [0xfb, 0x80, 0x72], [0x80, 0xb1, 0xd3], [0xfd, 0xb4, 0x62], [0xb3, 0xde, 0x69], [0xfc, 0xcd, 0xe5], [0xd9, 0xd9, 0xd9], [0xbc, 0x80, 0xbd], [0xcc, 0xeb, 0xc5], [0xff, 0xed, 0x6f]],
    },
    CuratedData {
        name: "bright",
        typ: PaletteType::Qual,
        rgb: &[[0x02, 0x3e, 0xff], [0xff, 0x7c, 0x00], [0x1a, 0xc9, 0x38], [0xe8, 0x00, 0x0b], [0x8b, 0x2b, 0xe2], [0x9f, 0x48, 0x00], [0xf1, 0x4c, 0xc1], [0xa3, 0xa3, 0xa3], [0xff, 0xc4, 0x00], [0x00, 0xd7, 0xff]],
    },
    CuratedData {
        name: "bright6",
        typ: PaletteType::Qual,
        rgb: &[[0x02, 0x3e, 0xff], [0x1a, 0xc9, 0x38], [0xe8, 0x00, 0x0b], [0x8b, 0x2b, 0xe2], [0xff, 0xc4, 0x00], [0x00, 0xd7, 0xff]],
    },
    CuratedData {
        name: "colorblind",
        typ: PaletteType::Qual,
        rgb: &[[0x01, 0x73, 0xb2], [0xde, 0x8f, 0x05], [0x02, 0x9e, 0x73], [0xd5, 0x5e, 0x00], [0xcc, 0x78, 0xbc], [0xca, 0x91, 0x61], [0xfb, 0xaf, 0xe4], [0x94, 0x94, 0x94], [0xec, 0xe1, 0x33], [0x56, 0xb4, 0xe9]],
    },
    CuratedData {
        name: "colorblind6",
        typ: PaletteType::Qual,
        rgb: &[[0x01, 0x73, 0xb2], [0x02, 0x9e, 0x73], [0xd5, 0x5e, 0x00], [0xcc, 0x78, 0xbc], [0xec, 0xe1, 0x33], [0x56, 0xb4, 0xe9]],
    },
    CuratedData {
        name: "dark",
        typ: PaletteType::Qual,
        rgb: &[[0x00, 0x1c, 0x7f], [0xb1, 0x40, 0x0d], [0x12, 0x71, 0x1c], [0x8c, 0x08, 0x00], [0x59, 0x1e, 0x71], [0x59, 0x2f, 0x0d], [0xa2, 0x35, 0x82], [0x3c, 0x3c, 0x3c], [0xb8, 0x85, 0x0a], [0x00, 0x63, 0x74]],
    },
    CuratedData {
        name: "dark6",
        typ: PaletteType::Qual,
        rgb: &[[0x00, 0x1c, 0x7f], [0x12, 0x71, 0x1c], [0x8c, 0x08, 0x00], [0x59, 0x1e, 0x71], [0xb8, 0x85, 0x0a], [0x00, 0x63, 0x74]],
    },
    CuratedData {
        name: "deep",
        typ: PaletteType::Qual,
        rgb: &[[0x4c, 0x72, 0xb0], [0xdd, 0x84, 0x52], [0x55, 0xa8, 0x68], [0xc4, 0x4e, 0x52], [0x81, 0x72, 0xb3], [0x93, 0x78, 0x60], [0xda, 0x8b, 0xc3], [0x8c, 0x8c, 0x8c], [0xcc, 0xb9, 0x74], [0x64, 0xb5, 0xcd]],
    },
    CuratedData {
        name: "deep6",
        typ: PaletteType::Qual,
        rgb: &[[0x4c, 0x72, 0xb0], [0x55, 0xa8, 0x68], [0xc4, 0x4e, 0x52], [0x81, 0x72, 0xb3], [0xcc, 0xb9, 0x74], [0x64, 0xb5, 0xcd]],
    },
    CuratedData {
        name: "muted",
        typ: PaletteType::Qual,
        rgb: &[[0x48, 0x78, 0xd0], [0xee, 0x85, 0x4a], [0x6a, 0xcc, 0x64], [0xd6, 0x5f, 0x5f], [0x95, 0x6c, 0xb4], [0x8c, 0x61, 0x3c], [0xdc, 0x7e, 0xc0], [0x79, 0x79, 0x79], [0xd5, 0xbb, 0x67], [0x82, 0xc6, 0xe2]],
    },
    CuratedData {
        name: "muted6",
        typ: PaletteType::Qual,
        rgb: &[[0x48, 0x78, 0xd0], [0x6a, 0xcc, 0x64], [0xd6, 0x5f, 0x5f], [0x95, 0x6c, 0xb4], [0xd5, 0xbb, 0x67], [0x82, 0xc6, 0xe2]],
    },
    CuratedData {
        name: "pastel",
        typ: PaletteType::Qual,
        rgb: &[[0xa1, 0xc9, 0xf4], [0xff, 0xb4, 0x82], [0x8d, 0xe5, 0xa1], [0xff, 0x9f, 0x9b], [0xd0, 0xbb, 0xff], [0xde, 0xbb, 0x9b], [0xfa, 0xb0, 0xe4], [0xcf, 0xcf, 0xcf], [0xff, 0xfe, 0xa3], [0xb9, 0xf2, 0xf0]],
    },
    CuratedData {
        name: "pastel6",
        typ: PaletteType::Qual,
        rgb: &[[0xa1, 0xc9, 0xf4], [0x8d, 0xe5, 0xa1], [0xff, 0x9f, 0x9b], [0xd0, 0xbb, 0xff], [0xff, 0xfe, 0xa3], [0xb9, 0xf2, 0xf0]],
    },
    CuratedData {
        name: "tab10",
        typ: PaletteType::Qual,
        rgb: &[[0x1f, 0x77, 0xb4], [0xff, 0x7f, 0x0e], [0x2c, 0xa0, 0x2c], [0xd6, 0x27, 0x28], [0x94, 0x67, 0xbd], [0x8c, 0x56, 0x4b], [0xe3, 0x77, 0xc2], [0x7f, 0x7f, 0x7f], [0xbc, 0xbd, 0x22], [0x17, 0xbe, 0xcf]],
    },
];
